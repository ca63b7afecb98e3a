//! Core domain models for the chat application.

use serde::{Deserialize, Serialize};

use super::value_object::{DisplayName, MessageContent, RoomId, Timestamp};

/// Represents one chat room: its message log and the users currently present.
///
/// `Room` itself is plain data. Callers that share a room between sessions wrap
/// it in a lock (see `InMemoryRoomRegistry`), so every method here runs under
/// that lock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier
    pub id: RoomId,
    /// Message history, in arrival order. Never evicted.
    pub messages: Vec<ChatMessage>,
    /// Display names of the users currently in the room. May contain duplicates.
    pub active_users: Vec<DisplayName>,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
}

impl Room {
    /// Create a new empty room with the given ID and creation timestamp
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            messages: Vec::new(),
            active_users: Vec::new(),
            created_at,
        }
    }

    /// Append a message to the history
    pub fn append_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Add a user to the active list.
    ///
    /// No duplicate check: joining twice under the same name yields two entries.
    pub fn add_active_user(&mut self, name: DisplayName) {
        self.active_users.push(name);
    }

    /// Remove the first entry matching `name`.
    ///
    /// The removed slot is filled with the last entry, so the relative order of
    /// the remaining users is not preserved. Absent names are ignored.
    pub fn remove_active_user(&mut self, name: &DisplayName) {
        if let Some(index) = self.active_users.iter().position(|user| user == name) {
            self.active_users.swap_remove(index);
        }
    }

    /// Copy out the current messages and active users
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            room_id: self.id.clone(),
            messages: self.messages.clone(),
            active_users: self.active_users.clone(),
            created_at: self.created_at,
        }
    }
}

/// Represents a chat message in the domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author's display name
    pub author: DisplayName,
    /// Message content
    pub content: MessageContent,
    /// Timestamp when the message was sent
    pub timestamp: Timestamp,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(author: DisplayName, content: MessageContent, timestamp: Timestamp) -> Self {
        Self {
            author,
            content,
            timestamp,
        }
    }
}

/// Point-in-time copy of a room's state.
///
/// Owned by the reader; it goes stale as soon as another session mutates the room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub room_id: RoomId,
    pub messages: Vec<ChatMessage>,
    pub active_users: Vec<DisplayName>,
    pub created_at: Timestamp,
}
