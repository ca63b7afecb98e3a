//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    #[error("DisplayName cannot be empty")]
    DisplayNameEmpty,

    #[error("DisplayName cannot exceed {max} bytes (got {actual})")]
    DisplayNameTooLong { max: usize, actual: usize },

    #[error("RoomId cannot be empty")]
    RoomIdEmpty,

    #[error("RoomId cannot exceed {max} bytes (got {actual})")]
    RoomIdTooLong { max: usize, actual: usize },

    #[error("MessageContent cannot be empty")]
    MessageContentEmpty,

    #[error("MessageContent cannot exceed {max} bytes (got {actual})")]
    MessageContentTooLong { max: usize, actual: usize },
}

/// Errors returned by the room registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The room id is not part of the registry
    #[error("Room not found: {0}")]
    RoomNotFound(String),
}
