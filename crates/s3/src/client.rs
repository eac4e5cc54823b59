//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from ingest-core.

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

use ingest_core::{Endpoint, Error, ObjectInfo, ObjectStore, Result};

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
    endpoint: Endpoint,
}

impl S3Client {
    /// Create a new S3 client for an endpoint
    ///
    /// No request is sent until the first operation.
    pub async fn new(endpoint: Endpoint) -> Self {
        // Build credentials provider
        let credentials = aws_credential_types::Credentials::new(
            endpoint.access_key.clone(),
            endpoint.secret_key.clone(),
            None, // session token
            None, // expiry
            "s3-ingest-static-credentials",
        );

        // Build SDK config
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(aws_config::Region::new(endpoint.region.clone()))
            .endpoint_url(&endpoint.url)
            .load()
            .await;

        // Path-style addressing keeps bucket names out of the host name
        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(true)
            .build();

        let client = aws_sdk_s3::Client::from_conf(s3_config);
        tracing::debug!(endpoint = ?endpoint, "s3 client configured");

        Self {
            inner: client,
            endpoint,
        }
    }

    /// Get the underlying aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.inner
    }

    /// Endpoint this client talks to
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn create_bucket(&self, bucket: &str) -> Result<()> {
        let mut request = self.inner.create_bucket().bucket(bucket);

        if self.endpoint.needs_location_constraint() {
            let constraint = BucketLocationConstraint::from(self.endpoint.region.as_str());
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(constraint)
                    .build(),
            );
        }

        request.send().await.map_err(map_sdk_error)?;

        Ok(())
    }

    async fn put_file(
        &self,
        bucket: &str,
        key: &str,
        source: &Path,
        content_type: Option<String>,
    ) -> Result<ObjectInfo> {
        let size = tokio::fs::metadata(source).await?.len();
        let body = ByteStream::from_path(source).await.map_err(|e| {
            Error::General(format!("Failed to read {}: {e}", source.display()))
        })?;

        let mut request = self
            .inner
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body);

        if let Some(ct) = &content_type {
            request = request.content_type(ct);
        }

        let response = request.send().await.map_err(map_sdk_error)?;

        let mut info = ObjectInfo::file(bucket, key, size);
        if let Some(etag) = response.e_tag() {
            info.etag = Some(etag.trim_matches('"').to_string());
        }
        info.version_id = response.version_id().map(|v| v.to_string());
        info.content_type = content_type;

        Ok(info)
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let response = self
            .inner
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(map_sdk_error)?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| Error::Network(e.to_string()))?
            .into_bytes()
            .to_vec();

        Ok(data)
    }
}

/// Convert an SDK error, keeping the provider's code and message intact
pub(crate) fn map_sdk_error<E, R>(err: SdkError<E, R>) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match &err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            Error::Network(DisplayErrorContext(&err).to_string())
        }
        SdkError::ServiceError(context) => {
            let service_err = context.err();
            match service_err.code() {
                Some(code) => Error::service(code, service_err.message().unwrap_or(code)),
                None => Error::General(DisplayErrorContext(&err).to_string()),
            }
        }
        _ => Error::General(DisplayErrorContext(&err).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::error::ErrorMetadata;
    use aws_sdk_s3::operation::create_bucket::CreateBucketError;

    fn service_error(code: &str, message: &str) -> SdkError<CreateBucketError, ()> {
        let meta = ErrorMetadata::builder().code(code).message(message).build();
        SdkError::service_error(CreateBucketError::generic(meta), ())
    }

    #[test]
    fn test_map_service_error_keeps_code() {
        let err = map_sdk_error(service_error("BucketAlreadyOwnedByYou", "already yours"));
        assert_eq!(err.code(), Some("BucketAlreadyOwnedByYou"));
        assert!(err.is_bucket_exists());
        assert_eq!(err.to_string(), "BucketAlreadyOwnedByYou: already yours");
    }

    #[test]
    fn test_map_access_denied() {
        let err = map_sdk_error(service_error("AccessDenied", "Access Denied"));
        assert!(!err.is_bucket_exists());
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_map_timeout_is_network() {
        let err = map_sdk_error(SdkError::<CreateBucketError, ()>::timeout_error(
            "operation timed out",
        ));
        assert!(matches!(err, Error::Network(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[tokio::test]
    async fn test_client_construction_is_offline() {
        let endpoint =
            Endpoint::new("http://127.0.0.1:1", "eu-central-1", "test", "test").unwrap();
        let client = S3Client::new(endpoint).await;
        assert_eq!(
            client.inner().config().region().map(|r| r.as_ref()),
            Some("eu-central-1")
        );
        assert_eq!(client.endpoint().url, "http://127.0.0.1:1");
    }
}
