//! Server startup errors.

use thiserror::Error;

use crate::domain::ValueObjectError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("no rooms configured")]
    NoRooms,

    #[error("invalid room id '{room}': {source}")]
    InvalidRoom {
        room: String,
        #[source]
        source: ValueObjectError,
    },

    #[error("room id '{room}' is longer than the {max} characters the login form accepts")]
    RoomIdTooLongForLogin { room: String, max: usize },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
