mod auth;
mod client;
mod commands;
mod types;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::auth::Authenticator;
use crate::client::ApiClient;
use crate::commands::{get, put, retry};
use crate::types::ApiRequest;

const BUILDBUCKET_URL: &str = "https://cr-buildbucket.appspot.com";
const BUILDBUCKET_API_PATH: &str = "_ah/api/buildbucket/v1/builds";

#[derive(Parser)]
#[command(name = "buildbucket")]
#[command(about = "Tool for interacting with Buildbucket")]
struct Cli {
    /// Print request and response details
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Buildbucket service URL
    #[arg(long, default_value = BUILDBUCKET_URL)]
    service_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get the status of a build
    Get(get::GetArgs),
    /// Schedule a new build
    Put(put::PutArgs),
    /// Ask the service to retry an existing build
    Retry(retry::RetryArgs),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let api_url = format!(
        "{}/{}",
        cli.service_url.trim_end_matches('/'),
        BUILDBUCKET_API_PATH
    );

    let (request, response_json): (ApiRequest, Option<PathBuf>) = match &cli.command {
        Commands::Get(args) => (get::request(&api_url, args), args.common.response_json.clone()),
        Commands::Put(args) => (put::request(&api_url, args)?, args.common.response_json.clone()),
        Commands::Retry(args) => (
            retry::request(&api_url, args),
            args.common.response_json.clone(),
        ),
    };

    let authenticator = Authenticator::from_env();
    let api_client = ApiClient::new(&authenticator)?;
    let response = api_client.send(&request, cli.verbose).await;

    client::report(&response, response_json.as_deref());

    Ok(if response.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
