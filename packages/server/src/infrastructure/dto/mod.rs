//! Data Transfer Objects (DTOs) for the chat server.
//!
//! DTOs are organized by protocol:
//! - `websocket`: input events and rendered frames exchanged over `/ws`
//! - `http`: HTTP API response DTOs
//!
//! `conversion` maps between DTOs and domain / view types.

pub mod conversion;
pub mod http;
pub mod websocket;
