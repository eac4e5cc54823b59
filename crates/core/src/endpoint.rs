//! Endpoint settings
//!
//! Connection details and credentials for an S3-compatible storage service.
//! Requests are always signed with SigV4 and use path-style addressing.

use url::Url;

use crate::error::{Error, Result};

/// Default endpoint (a local S3 emulator)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4566";

/// Default region
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default access key and secret key
pub const DEFAULT_CREDENTIAL: &str = "test";

/// An S3-compatible endpoint with static credentials
#[derive(Clone)]
pub struct Endpoint {
    /// S3 endpoint URL
    pub url: String,

    /// AWS region
    pub region: String,

    /// Access key ID
    pub access_key: String,

    /// Secret access key
    pub secret_key: String,
}

impl Endpoint {
    /// Create a new endpoint, validating the URL
    pub fn new(
        url: impl Into<String>,
        region: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self> {
        let url = url.into();
        validate_url(&url)?;

        Ok(Self {
            url,
            region: region.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        })
    }

    /// Whether bucket creation needs an explicit location constraint
    pub fn needs_location_constraint(&self) -> bool {
        self.region != DEFAULT_REGION
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            region: DEFAULT_REGION.to_string(),
            access_key: DEFAULT_CREDENTIAL.to_string(),
            secret_key: DEFAULT_CREDENTIAL.to_string(),
        }
    }
}

// Keep the secret out of debug logs
impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("url", &self.url)
            .field("region", &self.region)
            .field("access_key", &self.access_key)
            .field("secret_key", &"***")
            .finish()
    }
}

fn validate_url(endpoint: &str) -> Result<()> {
    let invalid = |reason: String| Error::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let parsed = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }

    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(())
}
