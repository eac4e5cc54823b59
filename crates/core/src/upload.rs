//! Upload pipeline
//!
//! Ensures the destination bucket and streams one file into it.

use crate::bucket::{BucketStatus, ensure_bucket};
use crate::error::Result;
use crate::request::UploadRequest;
use crate::traits::{ObjectInfo, ObjectStore};

/// Outcome of a completed upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    /// Whether the bucket had to be created
    pub bucket_status: BucketStatus,
    /// What the store reported for the new object
    pub object: ObjectInfo,
}

/// Upload `request.source` to `request.bucket/request.key`
///
/// The source is checked before the first store call, so a missing file
/// never reaches the network. Any failure after that aborts the upload.
pub async fn ingest<S>(store: &S, request: &UploadRequest) -> Result<UploadReceipt>
where
    S: ObjectStore + ?Sized,
{
    request.validate()?;

    let bucket_status = ensure_bucket(store, &request.bucket).await?;

    tracing::debug!(
        source = %request.source.display(),
        dest = %request.target_uri(),
        content_type = request.content_type.as_deref(),
        "uploading"
    );

    let object = store
        .put_file(
            &request.bucket,
            &request.key,
            &request.source,
            request.content_type.clone(),
        )
        .await?;

    tracing::info!(
        dest = %request.target_uri(),
        size = %object.size_human,
        etag = object.etag.as_deref(),
        version_id = object.version_id.as_deref(),
        "upload complete"
    );

    Ok(UploadReceipt {
        bucket_status,
        object,
    })
}
