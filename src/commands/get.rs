use clap::Args;
use reqwest::Method;

use crate::commands::CommonArgs;
use crate::types::ApiRequest;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// The ID of the build to get the status of
    #[arg(long)]
    pub id: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn request(api_url: &str, args: &GetArgs) -> ApiRequest {
    ApiRequest {
        method: Method::GET,
        url: format!("{api_url}/{}", args.id),
        body: None,
    }
}
