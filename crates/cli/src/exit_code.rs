//! Process exit codes
//!
//! Scripts branch on these values; changing one is a breaking change.

use ingest_core::Error;

/// How the process ends
///
/// `SourceNotFound` is only ever returned when the local file is missing,
/// so callers can tell it apart from anything the store reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// File uploaded
    Success = 0,

    /// Anything not covered below, including bad local settings
    GeneralError = 1,

    /// The source file does not exist or is not a regular file
    SourceNotFound = 2,

    /// No response from the store: connection refused, timeout
    NetworkError = 3,

    /// Store rejected the credentials or the caller's permissions
    AuthError = 4,

    /// Store reported a missing bucket or key
    NotFound = 5,

    /// Bucket name taken, or a conflicting bucket operation in flight
    Conflict = 6,
}

impl ExitCode {
    /// Numeric value passed to `std::process::exit`
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Map a raw code back to the enum
    pub const fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::GeneralError),
            2 => Some(Self::SourceNotFound),
            3 => Some(Self::NetworkError),
            4 => Some(Self::AuthError),
            5 => Some(Self::NotFound),
            6 => Some(Self::Conflict),
            _ => None,
        }
    }

    /// Exit code for a failed upload
    pub fn from_error(error: &Error) -> Self {
        Self::from_i32(error.exit_code()).unwrap_or(Self::GeneralError)
    }

    /// Short explanation, shown next to the number
    pub const fn description(self) -> &'static str {
        match self {
            Self::Success => "Upload completed",
            Self::GeneralError => "General error",
            Self::SourceNotFound => "Source file not found",
            Self::NetworkError => "Network error",
            Self::AuthError => "Authentication or permission failure",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Conflict",
        }
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_i32())
    }
}
