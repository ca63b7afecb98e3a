//! Multi-room terminal chat server.
//!
//! Each WebSocket connection gets its own session controller that drives a
//! login view and a chat view over a shared, fixed set of rooms.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub use config::ServerConfig;
pub use error::ServerError;
pub use ui::Server;
