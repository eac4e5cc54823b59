//! Upload request resolution
//!
//! Turns the raw source path, bucket and optional key into a validated
//! request. All checks here are local; nothing touches the network.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A single file upload: local source to bucket/key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Local file to upload
    pub source: PathBuf,
    /// Destination bucket
    pub bucket: String,
    /// Destination object key
    pub key: String,
    /// Content type sent with the object
    pub content_type: Option<String>,
}

impl UploadRequest {
    /// Resolve a request
    ///
    /// The source must be an existing regular file. When `key` is `None`
    /// or empty the source file's base name is used. The bucket name is
    /// passed through; the store decides whether it is valid.
    pub fn new(
        source: impl Into<PathBuf>,
        bucket: impl Into<String>,
        key: Option<String>,
    ) -> Result<Self> {
        let source = source.into();
        check_source(&source)?;

        let bucket = bucket.into();

        let key = match key {
            Some(k) if !k.is_empty() => k,
            _ => default_key(&source)?,
        };

        let content_type = mime_guess::from_path(&source)
            .first()
            .map(|m| m.essence_str().to_string());

        Ok(Self {
            source,
            bucket,
            key,
            content_type,
        })
    }

    /// Override the guessed content type
    pub fn with_content_type(mut self, content_type: Option<String>) -> Self {
        if content_type.is_some() {
            self.content_type = content_type;
        }
        self
    }

    /// Re-check that the source is still a regular file
    pub fn validate(&self) -> Result<()> {
        check_source(&self.source)
    }

    /// Destination as an s3:// URI
    pub fn target_uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

/// Base name of a path, used as the default object key
pub fn default_key(source: &Path) -> Result<String> {
    source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "Cannot derive an object key from '{}'",
                source.display()
            ))
        })
}

fn check_source(source: &Path) -> Result<()> {
    if source.is_file() {
        Ok(())
    } else {
        Err(Error::SourceNotFound(source.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_file(name: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, b"id,name\n1,ace\n").unwrap();
        (dir, path)
    }

    #[test]
    fn test_default_key_is_base_name() {
        let (_dir, path) = temp_file("cards_data.csv");
        let request = UploadRequest::new(&path, "my-bucket", None).unwrap();
        assert_eq!(request.key, "cards_data.csv");
        assert_eq!(request.bucket, "my-bucket");
        assert_eq!(request.target_uri(), "s3://my-bucket/cards_data.csv");
    }

    #[test]
    fn test_explicit_key_used_verbatim() {
        let (_dir, path) = temp_file("cards_data.csv");
        let request =
            UploadRequest::new(&path, "my-bucket", Some("raw/2024/cards.csv".into())).unwrap();
        assert_eq!(request.key, "raw/2024/cards.csv");
    }

    #[test]
    fn test_empty_key_falls_back_to_base_name() {
        let (_dir, path) = temp_file("cards_data.csv");
        let request = UploadRequest::new(&path, "my-bucket", Some(String::new())).unwrap();
        assert_eq!(request.key, "cards_data.csv");
    }

    #[test]
    fn test_missing_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.csv");
        let result = UploadRequest::new(&path, "my-bucket", None);
        assert!(matches!(result, Err(Error::SourceNotFound(p)) if p == path));
    }

    #[test]
    fn test_directory_source_rejected() {
        let dir = TempDir::new().unwrap();
        let result = UploadRequest::new(dir.path(), "my-bucket", None);
        assert!(matches!(result, Err(Error::SourceNotFound(_))));
    }

    #[test]
    fn test_bucket_name_left_to_the_store() {
        let (_dir, path) = temp_file("a.txt");
        let request = UploadRequest::new(&path, "ab", None).unwrap();
        assert_eq!(request.bucket, "ab");
        assert_eq!(request.target_uri(), "s3://ab/a.txt");
    }

    #[test]
    fn test_content_type_guess_and_override() {
        let (_dir, path) = temp_file("cards_data.csv");
        let request = UploadRequest::new(&path, "my-bucket", None).unwrap();
        assert_eq!(request.content_type.as_deref(), Some("text/csv"));

        let request = request.with_content_type(Some("application/octet-stream".into()));
        assert_eq!(
            request.content_type.as_deref(),
            Some("application/octet-stream")
        );

        let request = request.with_content_type(None);
        assert_eq!(
            request.content_type.as_deref(),
            Some("application/octet-stream")
        );
    }

    #[test]
    fn test_validate_after_removal() {
        let (_dir, path) = temp_file("gone.csv");
        let request = UploadRequest::new(&path, "my-bucket", None).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(request.validate(), Err(Error::SourceNotFound(_))));
    }
}
