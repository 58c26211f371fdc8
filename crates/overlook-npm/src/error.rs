//! Error types for overlook-npm

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using overlook-npm Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in overlook-npm
#[derive(Debug, Error)]
pub enum Error {
    /// No package.json exists at the audited directory
    #[error("no package.json found in {0}")]
    ManifestNotFound(PathBuf),

    /// package.json exists but could not be read or parsed
    #[error("unreadable package.json at {0}: {1}")]
    ManifestUnreadable(PathBuf, String),

    /// The explain invocation could not produce usable output at all
    #[error("npm explain failed: {0}")]
    QueryInvocationFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<Error> for overlook_core::Error {
    fn from(err: Error) -> Self {
        overlook_core::Error::Query(err.to_string())
    }
}
