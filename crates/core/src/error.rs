//! Client-side error model.

use thiserror::Error;

/// Result type used across the client.
pub type ClientResult<T> = Result<T, ClientError>;

/// Error raised by a user action against the Inventory API.
///
/// Keep this focused on what a single action can surface (transport failure,
/// HTTP status, malformed body, client-side precondition). Nothing here is
/// fatal to the view; every variant ends up as one banner message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never reached the API or no response came back.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success HTTP status.
    #[error("request failed with status {status}")]
    Request { status: u16 },

    /// The response body could not be parsed.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// A client-side precondition failed; no request was made.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl ClientError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn request(status: u16) -> Self {
        Self::Request { status }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
