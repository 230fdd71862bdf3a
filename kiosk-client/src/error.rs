//! Client error types

use thiserror::Error;

/// Client error type
///
/// Service-side failures carry the `detail` string from the error body so
/// the operator sees the service's own message verbatim.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// The service-provided failure message, if the service sent one
    ///
    /// Returns `None` for transport-level failures, which have no
    /// operator-facing message of their own.
    pub fn service_detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized(detail)
            | Self::Forbidden(detail)
            | Self::NotFound(detail)
            | Self::Validation(detail)
            | Self::Internal(detail)
                if !detail.is_empty() =>
            {
                Some(detail)
            }
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
