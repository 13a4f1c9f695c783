//! Error types for session persistence

use thiserror::Error;

/// Custom error type for session storage backends
#[derive(Error, Debug)]
pub enum SessionError {
    /// The backend could not read, write or delete a record
    #[error("Session storage error: {0}")]
    Storage(String),

    /// A stored record could not be encoded or decoded
    #[error("Session record serialization error: {0}")]
    Serialization(String),

    /// The backend could not be set up
    #[error("Session storage configuration error: {0}")]
    Configuration(String),
}

impl From<redis::RedisError> for SessionError {
    fn from(error: redis::RedisError) -> Self {
        SessionError::Storage(error.to_string())
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(error: serde_json::Error) -> Self {
        SessionError::Serialization(error.to_string())
    }
}

/// Type alias for Result with SessionError
pub type SessionResult<T> = Result<T, SessionError>;
