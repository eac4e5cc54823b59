//! upload - Put one local file into a bucket
//!
//! Ensures the bucket exists, then uploads the file under the given key
//! (or the file's base name).

use std::path::{Path, PathBuf};

use clap::Args;
use ingest_core::endpoint::{DEFAULT_CREDENTIAL, DEFAULT_ENDPOINT, DEFAULT_REGION};
use ingest_core::{BucketStatus, Endpoint, UploadRequest, ingest};
use ingest_s3::S3Client;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Upload arguments
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Path to local file to upload
    #[arg(short, long, default_value = "cards_data.csv")]
    pub file: PathBuf,

    /// Bucket name
    #[arg(short, long, default_value = "my-bucket")]
    pub bucket: String,

    /// Object key (defaults to the file's base name)
    #[arg(short, long)]
    pub key: Option<String>,

    /// S3 endpoint URL
    #[arg(short, long, env = "S3_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Region
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Access key ID
    #[arg(long, env = "AWS_ACCESS_KEY_ID", default_value = DEFAULT_CREDENTIAL)]
    pub access_key: String,

    /// Secret access key
    #[arg(
        long,
        env = "AWS_SECRET_ACCESS_KEY",
        default_value = DEFAULT_CREDENTIAL,
        hide_env_values = true,
        hide_default_value = true
    )]
    pub secret_key: String,

    /// Content type for the object (guessed from the extension if omitted)
    #[arg(long)]
    pub content_type: Option<String>,
}

/// Execute the upload
pub async fn execute(args: UploadArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    // Local checks first: nothing below may touch the network
    let request = match UploadRequest::new(&args.file, &args.bucket, args.key) {
        Ok(r) => r.with_content_type(args.content_type),
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    let endpoint = match Endpoint::new(
        &args.endpoint,
        args.region,
        args.access_key,
        args.secret_key,
    ) {
        Ok(ep) => ep,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    let client = S3Client::new(endpoint).await;

    match ingest(&client, &request).await {
        Ok(receipt) => {
            if receipt.bucket_status == BucketStatus::Created {
                tracing::info!(bucket = %request.bucket, "created bucket");
            }
            formatter.println(&confirmation(
                &args.file,
                &request.target_uri(),
                &args.endpoint,
            ));
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Upload failed: {e}"));
            ExitCode::from_error(&e)
        }
    }
}

/// The single line printed after a successful upload
pub fn confirmation(source: &Path, target_uri: &str, endpoint: &str) -> String {
    format!(
        "Uploaded `{}` to {target_uri} via {endpoint}",
        source.display()
    )
}
