//! Error types shared by the backend client crates
//!
//! Every failure a caller can observe from a backend call is one of the
//! variants of [`ClientError`].

use thiserror::Error;

/// User-facing text for a request that never reached the server
pub const CONNECTION_FAILED_MESSAGE: &str = "서버 연결에 실패했습니다.";

/// User-facing text for a request that exceeded its deadline
pub const TIMEOUT_MESSAGE: &str = "서버 응답 시간이 초과되었습니다.";

const UNAUTHORIZED_MESSAGE: &str = "로그인이 필요합니다.";
const FORBIDDEN_MESSAGE: &str = "권한이 없습니다.";
const NOT_FOUND_MESSAGE: &str = "요청한 정보를 찾을 수 없습니다.";
const INVALID_RESPONSE_MESSAGE: &str = "서버 응답을 처리할 수 없습니다.";

/// Error type for calls against the backend REST API
#[derive(Error, Debug)]
pub enum ClientError {
    /// No response was received from the server
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request did not complete before its deadline
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-success status
    #[error("Request failed with status {status} {status_text}")]
    RequestFailed {
        status: u16,
        status_text: String,
        /// Message extracted from the error body, or a fallback supplied by
        /// the resource client when the body was empty
        message: Option<String>,
    },

    /// A success response did not match the expected entity shape
    #[error("Schema error: {0}")]
    Schema(String),

    /// The request payload could not be encoded
    #[error("Payload error: {0}")]
    Payload(String),

    /// The client could not be constructed
    #[error("Client configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP status of a failed request, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Fill in `fallback` as the message of a `RequestFailed` error whose
    /// body carried none. Other errors pass through unchanged.
    pub fn with_fallback(self, fallback: &str) -> Self {
        match self {
            ClientError::RequestFailed {
                status,
                status_text,
                message: None,
            } => ClientError::RequestFailed {
                status,
                status_text,
                message: Some(fallback.to_string()),
            },
            other => other,
        }
    }

    /// Generic text for the status of a failed request
    ///
    /// Ignores any message carried by the error, so a caller can choose
    /// status wording over a per-operation fallback.
    pub fn status_message(&self) -> Option<&'static str> {
        match self.status()? {
            401 => Some(UNAUTHORIZED_MESSAGE),
            403 => Some(FORBIDDEN_MESSAGE),
            404 => Some(NOT_FOUND_MESSAGE),
            _ => None,
        }
    }

    /// Text suitable for an inline form message
    ///
    /// A message from the error body (or a fallback) wins; the generic
    /// status text only covers failures that carry none.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport(_) => CONNECTION_FAILED_MESSAGE.to_string(),
            ClientError::Timeout(_) => TIMEOUT_MESSAGE.to_string(),
            ClientError::RequestFailed {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::RequestFailed {
                status,
                status_text,
                message: None,
            } => match self.status_message() {
                Some(text) => text.to_string(),
                None => format!("요청에 실패했습니다. ({} {})", status, status_text),
            },
            ClientError::Schema(_) => INVALID_RESPONSE_MESSAGE.to_string(),
            ClientError::Payload(message) | ClientError::Configuration(message) => message.clone(),
        }
    }
}

/// Type alias for Result with ClientError
pub type ClientResult<T> = Result<T, ClientError>;
