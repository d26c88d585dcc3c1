use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use reqwest::Method;
use serde_json::{Map, Value};

use crate::commands::CommonArgs;
use crate::types::{ApiRequest, Parameters, PutBody};

#[derive(Args, Debug)]
pub struct PutArgs {
    /// The bucket to schedule the build on. Typically the master name,
    /// e.g. master.tryserver.chromium.linux
    #[arg(short, long)]
    pub bucket: String,

    /// The builder to schedule the build on
    #[arg(short = 'n', long)]
    pub builder_name: String,

    /// A file to load a JSON list of change dicts from
    #[arg(short, long, value_name = "PATH")]
    pub changes: Option<PathBuf>,

    /// A file to load a JSON dict of properties from. Use "-" to pipe
    /// JSON from another command
    #[arg(short, long, value_name = "PATH")]
    pub properties: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn request(api_url: &str, args: &PutArgs) -> Result<ApiRequest> {
    let mut changes: Vec<Value> = Vec::new();
    if let Some(path) = &args.changes {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("could not read changes file `{}`", path.display()))?;
        match serde_json::from_str::<Vec<Value>>(&contents) {
            Ok(list) => changes.extend(list),
            Err(err) => {
                eprintln!("{} contained invalid JSON list.", path.display());
                return Err(err.into());
            }
        }
    }

    let mut properties: Map<String, Value> = Map::new();
    if let Some(source) = &args.properties {
        let contents = if source == "-" {
            std::io::read_to_string(std::io::stdin()).context("could not read standard input")?
        } else {
            fs::read_to_string(source)
                .with_context(|| format!("could not read properties file `{source}`"))?
        };
        match serde_json::from_str::<Map<String, Value>>(&contents) {
            Ok(map) => properties.extend(map),
            Err(err) => {
                eprintln!("{source} contained invalid JSON dict.");
                return Err(err.into());
            }
        }
    }

    let parameters_json = serde_json::to_string(&Parameters {
        builder_name: args.builder_name.clone(),
        changes,
        properties,
    })?;
    let body = serde_json::to_string(&PutBody {
        bucket: args.bucket.clone(),
        parameters_json,
    })?;

    Ok(ApiRequest {
        method: Method::PUT,
        url: api_url.to_string(),
        body: Some(body),
    })
}
