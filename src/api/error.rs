//! Errors raised while routing, sending and decoding API calls.

use thiserror::Error;

/// Errors produced while building a request.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Parameters could not be encoded as JSON
    #[error("Failed to encode request body: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The path needs the current user's id but nobody is logged in
    #[error("Endpoint '{endpoint}' requires a logged-in user")]
    MissingUserId { endpoint: &'static str },
}

/// Errors reported by a [`Transport`](super::Transport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Errors surfaced by [`ApiService`](super::ApiService) calls.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Router(#[from] RouterError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Server answered with a non-2xx status
    #[error("Server error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Router(RouterError::Encoding(_)) => "encoding_error",
            ApiError::Router(RouterError::MissingUserId { .. }) => "not_logged_in",
            ApiError::Transport(TransportError::Timeout { .. }) => "timeout",
            ApiError::Transport(_) => "transport_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode(_) => "decode_error",
        }
    }
}
