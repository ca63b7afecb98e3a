//! Per-connection view state machines.
//!
//! Each view owns only its local focus state. A view never touches a room: it
//! turns input events into an optional [`Intent`] that the session controller
//! applies to the registry.

pub mod chat;
pub mod login;

pub use chat::{ChatFocus, ChatView};
pub use login::{LoginAction, LoginFocus, LoginView};

/// Structured request emitted by a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Login flow asks to join the room with this id
    RoomJoinRequested { room_id: String },
    /// Chat flow submitted a message
    MessageSent { text: String },
    /// Chat flow asks to leave the current room
    LeaveChat,
    /// Login flow asks to close the connection
    Quit,
}
