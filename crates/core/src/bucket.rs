//! Idempotent bucket creation

use crate::error::Result;
use crate::traits::ObjectStore;

/// What `ensure_bucket` found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketStatus {
    /// The bucket was created by this call
    Created,
    /// The store reported the bucket as already existing
    AlreadyExists,
}

/// Make sure `bucket` exists
///
/// Creation is always attempted. `BucketAlreadyOwnedByYou` and
/// `BucketAlreadyExists` count as success; every other error is returned
/// as the store reported it.
pub async fn ensure_bucket<S>(store: &S, bucket: &str) -> Result<BucketStatus>
where
    S: ObjectStore + ?Sized,
{
    match store.create_bucket(bucket).await {
        Ok(()) => {
            tracing::debug!(bucket, "bucket created");
            Ok(BucketStatus::Created)
        }
        Err(e) if e.is_bucket_exists() => {
            tracing::debug!(bucket, code = e.code(), "bucket already exists");
            Ok(BucketStatus::AlreadyExists)
        }
        Err(e) => Err(e),
    }
}
