//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server refused the WebSocket upgrade
    #[error("Server rejected the connection with HTTP {0}")]
    Rejected(u16),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// A typed line that cannot be turned into input events
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputParseError {
    #[error("unknown command '/{0}' (try /help)")]
    UnknownCommand(String),

    #[error("usage: /resize <width> <height>")]
    InvalidResize,
}
