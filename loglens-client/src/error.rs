//! Error types for the loglens client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the log-analysis service
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response (DNS, connect,
    /// timeout, or a broken body stream)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The service answered with a non-success status and no structured
    /// body the caller could act on
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// A success response whose body did not decode
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Build an [`ClientError::ApiError`] from a status and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// The HTTP status of an API error, if this is one
    fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 4xx API errors
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// True for 5xx API errors
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s >= 500)
    }
}
