//! Error types for ingest-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for ingest-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Provider codes meaning the bucket is already there
pub const BUCKET_EXISTS_CODES: [&str; 2] = ["BucketAlreadyOwnedByYou", "BucketAlreadyExists"];

const AUTH_CODES: [&str; 7] = [
    "AccessDenied",
    "AllAccessDisabled",
    "InvalidAccessKeyId",
    "InvalidToken",
    "ExpiredToken",
    "SignatureDoesNotMatch",
    "AuthorizationHeaderMalformed",
];

/// Error types for ingest-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Source file is missing or not a regular file
    #[error("File not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Argument that cannot be resolved locally
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid endpoint URL
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error returned by the object store, carried through unchanged
    #[error("{code}: {message}")]
    Service { code: String, message: String },

    /// Network error: the request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Build a provider error from its code and message
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Provider error code, if this error came from the object store
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Service { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Whether the store reported the bucket as already existing
    pub fn is_bucket_exists(&self) -> bool {
        self.code()
            .is_some_and(|code| BUCKET_EXISTS_CODES.contains(&code))
    }

    /// Get the appropriate exit code for this error
    ///
    /// 2 is reserved for a missing source file.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::SourceNotFound(_) => 2,                          // SourceNotFound
            Error::Network(_) => 3,                                 // NetworkError
            Error::Service { code, .. } => service_exit_code(code), // classified by code
            _ => 1,                                                 // GeneralError
        }
    }
}

fn service_exit_code(code: &str) -> i32 {
    if AUTH_CODES.contains(&code) {
        4
    } else if matches!(code, "NoSuchBucket" | "NoSuchKey" | "NotFound") {
        5
    } else if BUCKET_EXISTS_CODES.contains(&code) || code == "OperationAborted" {
        6
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(Error::SourceNotFound("x.csv".into()).exit_code(), 2);
        assert_eq!(Error::InvalidArgument("test".into()).exit_code(), 1);
        assert_eq!(
            Error::InvalidEndpoint {
                endpoint: "x".into(),
                reason: "y".into()
            }
            .exit_code(),
            1
        );
        assert_eq!(Error::Network("test".into()).exit_code(), 3);
        assert_eq!(Error::General("test".into()).exit_code(), 1);
    }

    #[test]
    fn test_only_missing_source_exits_2() {
        let others = [
            Error::InvalidArgument("bad".into()),
            Error::InvalidEndpoint {
                endpoint: "x".into(),
                reason: "y".into(),
            },
            Error::Io(std::io::Error::other("disk")),
            Error::service("InvalidBucketName", "The specified bucket is not valid."),
            Error::service("InvalidArgument", "bad"),
            Error::Network("refused".into()),
            Error::General("oops".into()),
        ];
        for err in &others {
            assert_ne!(err.exit_code(), 2, "{err} must not share the missing-file code");
        }
    }

    #[test]
    fn test_service_exit_codes() {
        assert_eq!(Error::service("AccessDenied", "no").exit_code(), 4);
        assert_eq!(Error::service("InvalidAccessKeyId", "no").exit_code(), 4);
        assert_eq!(Error::service("NoSuchBucket", "gone").exit_code(), 5);
        assert_eq!(Error::service("NoSuchKey", "gone").exit_code(), 5);
        assert_eq!(Error::service("BucketAlreadyExists", "taken").exit_code(), 6);
        assert_eq!(Error::service("InternalError", "oops").exit_code(), 1);
    }

    #[test]
    fn test_bucket_exists_detection() {
        assert!(Error::service("BucketAlreadyOwnedByYou", "").is_bucket_exists());
        assert!(Error::service("BucketAlreadyExists", "").is_bucket_exists());
        assert!(!Error::service("AccessDenied", "").is_bucket_exists());
        assert!(!Error::Network("BucketAlreadyExists".into()).is_bucket_exists());
    }

    #[test]
    fn test_error_display() {
        let err = Error::SourceNotFound("cards_data.csv".into());
        assert_eq!(err.to_string(), "File not found: cards_data.csv");

        let err = Error::service("AccessDenied", "Access Denied");
        assert_eq!(err.to_string(), "AccessDenied: Access Denied");
    }
}
