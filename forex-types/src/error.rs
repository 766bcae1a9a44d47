//! Error types for the forex API.

use std::time::Duration;

/// Repository-level errors (data access failures).
///
/// Absence of data is not an error; repositories report it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Repository call timed out after {0:?}")]
    Timeout(Duration),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message safe to show to API clients. Internal details stay in the logs.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::NotFound(msg) => msg,
            AppError::Internal(_) => "Internal server error",
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Internal(err.to_string())
    }
}
