//! Error types for krama modules using thiserror.

use thiserror::Error;

/// Errors from git invocations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git binary not found. Install git and ensure it is on PATH")]
    NotInstalled,

    #[error("Failed to spawn git {operation}: {source}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from compiling subject extraction patterns.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid pattern '{0}': {1}")]
    Invalid(String, #[source] regex_lite::Error),

    #[error(
        "Pattern '{0}' has no capture group. Wrap the part to extract in parentheses, e.g. #(\\d+)"
    )]
    NoCaptureGroup(String),
}
