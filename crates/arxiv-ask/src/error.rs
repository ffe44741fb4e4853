//! Error types for the arxiv-ask client and normalizer.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! None of these escape the search facade: it logs them and degrades to an empty result.

use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Invalid request parameters (400 or 422 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from the service
        message: String,
    },

    /// Endpoint not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// HTTP status code carried by this error, if the service answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::NotFound { .. } => Some(404),
            Self::Server { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body carried by this error, for diagnostic logging.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::BadRequest { message }
            | Self::Server { message, .. }
            | Self::UnexpectedStatus { message, .. } => Some(message),
            Self::NotFound { resource } => Some(resource),
            _ => None,
        }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Server { .. })
    }
}

/// Why no identifier could be derived from a candidate value.
///
/// Returned by [`crate::normalize::identifier_from_value`]; each shape mapper
/// decides which fallback value to use.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The candidate is not a string or number (object, array, boolean, null).
    #[error("identifier candidate is not text (found {kind})")]
    NotText {
        /// JSON kind of the rejected value
        kind: &'static str,
    },

    /// The candidate has no non-empty path segment.
    #[error("identifier candidate {candidate:?} has no usable tail segment")]
    NoTail {
        /// The rejected candidate text
        candidate: String,
    },
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
