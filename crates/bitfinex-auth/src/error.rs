//! Error types for authentication operations

/// Errors that can occur while building or signing authenticated requests
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Request body is not valid UTF-8 text
    #[error("Request body is not valid UTF-8: {0}")]
    InvalidPayload(#[from] std::str::Utf8Error),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
