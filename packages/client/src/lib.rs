//! Line-oriented terminal client for the Tsudoi chat server.
//!
//! Typed lines are turned into input events and sent over the WebSocket. The
//! frame answering the last event of each line is rendered as plain text.

pub mod error;
pub mod formatter;
pub mod input;
pub mod pending;
pub mod session;
mod ui;

pub use error::ClientError;
pub use session::run_client_session;
