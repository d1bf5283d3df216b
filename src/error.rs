use std::io;

use http::StatusCode;
use thiserror::Error;

/// Error types for LogSnag client operations
///
/// Every call either returns a decoded value or one of these; nothing is
/// retried or recovered internally.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client construction failed (e.g. the HTTP client could not be built)
    #[error("Client build error: {0}")]
    Build(String),

    /// Network-level failure: DNS, connection refused, timeout
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx HTTP response; `body` is the raw response text
    #[error("API error: status={status}")]
    Api { status: StatusCode, body: String },

    /// Successful status but the response body was not valid JSON
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// I/O error (blocking runtime creation)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ClientError {
    /// HTTP status of an [`ClientError::Api`] error, if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
