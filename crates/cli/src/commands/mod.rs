//! CLI definition and execution
//!
//! The binary does one thing, so the upload flags sit directly on the
//! top-level parser next to the output switches.

use clap::Parser;

use crate::exit_code::ExitCode;
use crate::output::OutputConfig;

pub mod upload;

pub use upload::UploadArgs;

/// s3-ingest - upload a file to S3-compatible object storage
///
/// Creates the bucket if it does not exist, then uploads the file.
#[derive(Parser, Debug)]
#[command(name = "s3-ingest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub upload: UploadArgs,

    /// Disable colored output
    #[arg(long, default_value = "false")]
    pub no_color: bool,

    /// Suppress the confirmation line
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub debug: bool,
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        no_color: cli.no_color,
        quiet: cli.quiet,
    };

    upload::execute(cli.upload, output_config).await
}
