//! ingest-core: Core library for the s3-ingest upload tool
//!
//! This crate provides the core functionality for s3-ingest, including:
//! - Endpoint settings and validation
//! - Upload request resolution (default keys, content types)
//! - ObjectStore trait for the storage calls
//! - Idempotent bucket creation and the upload pipeline
//!
//! This crate is designed to be independent of any specific S3 SDK,
//! so the pipeline can be tested against a mock store.

pub mod bucket;
pub mod endpoint;
pub mod error;
pub mod request;
pub mod traits;
pub mod upload;

pub use bucket::{BucketStatus, ensure_bucket};
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use request::UploadRequest;
pub use traits::{ObjectInfo, ObjectStore};
pub use upload::{UploadReceipt, ingest};
