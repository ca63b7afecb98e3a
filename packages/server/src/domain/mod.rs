//! Domain layer for the chat application.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod registry;
pub mod value_object;

pub use entity::{ChatMessage, Room, RoomSnapshot};
pub use error::{RegistryError, ValueObjectError};
pub use registry::RoomRegistry;
pub use value_object::{
    DisplayName, MESSAGE_CONTENT_MAX_LEN, MessageContent, RoomId, Timestamp,
};

#[cfg(test)]
pub use registry::MockRoomRegistry;
