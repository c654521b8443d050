//! Error types for directory operations.
//!
//! The directory is reached over the network, so the central distinction is
//! retryability: `Transient` failures may succeed on a later attempt,
//! everything else is final for the request that produced it.

use std::fmt;

/// Errors from directory operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Network-level failure or a 5xx response. The caller may retry.
    Transient { reason: String },
    /// A 4xx response. Retrying the same request will not help.
    Permanent { status: u16, reason: String },
    /// The directory answered but rejected the request at the envelope level.
    Rejected { message: String },
    /// The response body could not be interpreted.
    Decode { reason: String },
    /// The client could not be constructed from its configuration.
    Config { reason: String },
}

impl DirectoryError {
    /// Returns true if a retry of the same request could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transient { reason } => {
                write!(f, "transient directory failure: {reason}")
            }
            Self::Permanent { status, reason } => {
                write!(f, "directory request failed ({status}): {reason}")
            }
            Self::Rejected { message } => {
                write!(f, "directory rejected the request: {message}")
            }
            Self::Decode { reason } => {
                write!(f, "unreadable directory response: {reason}")
            }
            Self::Config { reason } => {
                write!(f, "invalid directory client configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for DirectoryError {}
