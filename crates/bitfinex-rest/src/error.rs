//! Error types for REST API operations

use bitfinex_auth::AuthError;

/// Errors that can occur during REST API operations
///
/// Nothing here is retried by the client; every failure is returned to the
/// caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Credentials were rejected locally or the request could not be signed
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Transport failure reported by a non-reqwest transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// API answered with a non-success status
    #[error("API error (status {status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Request body could not be serialized
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Response body is not valid JSON
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// Response is valid JSON but lacks an expected field
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl RestError {
    /// Convert a reqwest failure, keeping timeouts distinct
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the remote host was never reached or did not answer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout | Self::Transport(_))
    }

    /// Check if this error comes from missing or rejected credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthRequired | Self::Auth(_))
            || matches!(self.status(), Some(401) | Some(403))
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
