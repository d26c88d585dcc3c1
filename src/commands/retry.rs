use clap::Args;
use reqwest::Method;

use crate::commands::CommonArgs;
use crate::types::ApiRequest;

#[derive(Args, Debug)]
pub struct RetryArgs {
    /// The ID of the build to retry
    #[arg(long)]
    pub id: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn request(api_url: &str, args: &RetryArgs) -> ApiRequest {
    ApiRequest {
        method: Method::PUT,
        url: format!("{api_url}/{}/retry", args.id),
        body: None,
    }
}
