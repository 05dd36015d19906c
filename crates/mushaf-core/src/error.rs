//! Error types for Mushaf.

use thiserror::Error;

/// Result type alias using Mushaf's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Mushaf.
#[derive(Error, Debug)]
pub enum Error {
    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] HttpError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    // Content API errors
    #[error("API error {code}: {message}")]
    Api { code: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to parse API response: {0}")]
    Parse(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    // Generic errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// HTTP-specific errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed with status {status}: {message}")]
    StatusError { status: u16, message: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Returns true if this error is retryable.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_)
            | Self::RateLimited { .. }
            | Self::Http(HttpError::ConnectionFailed(_) | HttpError::Timeout) => true,
            Self::Http(HttpError::StatusError { status, .. }) => *status >= 500,
            _ => false,
        }
    }
}
