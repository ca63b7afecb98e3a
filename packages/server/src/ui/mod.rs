//! Presentation layer: input events, view state machines, the per-connection
//! session controller and the axum server that hosts it.

pub mod event;
mod handler;
mod server;
pub mod session;
pub mod shutdown;
mod signal;
pub mod state;
pub mod view;

pub use server::Server;
pub use signal::shutdown_signal;
