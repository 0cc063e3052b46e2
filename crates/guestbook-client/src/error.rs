//! Client Errors
//!
//! Transport, status, decode and configuration failures. These are logged,
//! never shown to the user.

/// Common result type for API calls
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Request could not be sent or the connection failed
    Transport(String),
    /// Non-OK HTTP status where one is treated as a failure (list only)
    Status(u16),
    /// Response body was not the expected JSON
    Decode(String),
    /// Invalid base URL
    Config(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ClientError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            ClientError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            ClientError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::Status(status.as_u16())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
