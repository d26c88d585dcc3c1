pub mod get;
pub mod put;
pub mod retry;

use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// A path to which the response JSON will be written. If no valid JSON
    /// is received, nothing will be written.
    #[arg(long, value_name = "PATH")]
    pub response_json: Option<PathBuf>,
}
