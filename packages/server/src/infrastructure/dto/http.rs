//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use super::websocket::MessageDto;

/// Room summary for list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    pub active_users: Vec<String>,
    pub message_count: usize,
    pub created_at: String, // RFC 3339, UTC
}

/// Room detail for detail endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub active_users: Vec<String>,
    pub messages: Vec<MessageDto>,
    pub created_at: String, // RFC 3339, UTC
}
