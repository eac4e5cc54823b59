//! ObjectStore trait definition
//!
//! This trait defines the interface for the storage calls an upload needs.
//! It keeps the upload pipeline decoupled from the specific S3 SDK.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Metadata reported by the store for an uploaded object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
    /// Bucket holding the object
    pub bucket: String,

    /// Object key
    pub key: String,

    /// Size in bytes
    pub size_bytes: u64,

    /// Human-readable size
    pub size_human: String,

    /// ETag (usually MD5 for single-part uploads)
    pub etag: Option<String>,

    /// Version ID, when the bucket is versioned
    pub version_id: Option<String>,

    /// Content type sent with the object
    pub content_type: Option<String>,
}

impl ObjectInfo {
    /// Create a new ObjectInfo for a file
    pub fn file(bucket: impl Into<String>, key: impl Into<String>, size: u64) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            size_bytes: size,
            size_human: humansize::format_size(size, humansize::BINARY),
            etag: None,
            version_id: None,
            content_type: None,
        }
    }
}

/// Trait for S3-compatible storage operations
///
/// This trait is implemented by the S3 adapter and can be mocked for testing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Create a bucket
    ///
    /// Provider refusals come back as `Error::Service` with the native code.
    async fn create_bucket(&self, bucket: &str) -> Result<()>;

    /// Stream a local file to bucket/key
    async fn put_file(
        &self,
        bucket: &str,
        key: &str,
        source: &Path,
        content_type: Option<String>,
    ) -> Result<ObjectInfo>;

    /// Get object content as bytes
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;
}
