//! Conversion logic between DTOs and domain / view types.

use thiserror::Error;
use tsudoi_shared::time::timestamp_to_utc_rfc3339;

use crate::{
    domain::{ChatMessage, RoomSnapshot, Timestamp},
    infrastructure::dto::{
        http::{RoomDetailDto, RoomSummaryDto},
        websocket as dto,
    },
    ui::{
        event::{InputEvent, Key, MouseKind, TerminalSize},
        view::{ChatFocus, LoginAction, LoginFocus},
    },
};

/// Inbound event that is well-formed JSON but not a usable event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputEventError {
    #[error("key event 'char' requires a 'ch' field")]
    MissingChar,

    #[error("character {0:?} is not printable")]
    NonPrintableChar(char),
}

// ========================================
// DTO → Input event
// ========================================

impl TryFrom<dto::InputEventDto> for InputEvent {
    type Error = InputEventError;

    fn try_from(dto: dto::InputEventDto) -> Result<Self, Self::Error> {
        let event = match dto {
            dto::InputEventDto::Key { key, ch } => InputEvent::Key(key_from_dto(key, ch)?),
            dto::InputEventDto::Resize { width, height } => {
                InputEvent::Resize(TerminalSize { width, height })
            }
            dto::InputEventDto::Mouse { kind, x, y } => InputEvent::Mouse {
                kind: kind.into(),
                x,
                y,
            },
        };
        Ok(event)
    }
}

fn key_from_dto(key: dto::KeyDto, ch: Option<char>) -> Result<Key, InputEventError> {
    let key = match key {
        dto::KeyDto::Char => match ch {
            Some(c) if c.is_control() => return Err(InputEventError::NonPrintableChar(c)),
            Some(c) => Key::Char(c),
            None => return Err(InputEventError::MissingChar),
        },
        dto::KeyDto::Backspace => Key::Backspace,
        dto::KeyDto::Enter => Key::Enter,
        dto::KeyDto::Tab => Key::Tab,
        dto::KeyDto::BackTab => Key::BackTab,
        dto::KeyDto::Left => Key::Left,
        dto::KeyDto::Right => Key::Right,
        dto::KeyDto::Up => Key::Up,
        dto::KeyDto::Down => Key::Down,
        dto::KeyDto::PageUp => Key::PageUp,
        dto::KeyDto::PageDown => Key::PageDown,
        dto::KeyDto::Esc => Key::Esc,
        dto::KeyDto::CtrlC => Key::CtrlC,
    };
    Ok(key)
}

impl From<dto::MouseKindDto> for MouseKind {
    fn from(dto: dto::MouseKindDto) -> Self {
        match dto {
            dto::MouseKindDto::WheelUp => MouseKind::WheelUp,
            dto::MouseKindDto::WheelDown => MouseKind::WheelDown,
            dto::MouseKindDto::Move => MouseKind::Move,
        }
    }
}

// ========================================
// Domain / View → DTO
// ========================================

impl From<&ChatMessage> for dto::MessageDto {
    fn from(model: &ChatMessage) -> Self {
        Self {
            author: model.author.as_str().to_string(),
            text: model.content.as_str().to_string(),
            timestamp: model.timestamp.value(),
        }
    }
}

impl From<TerminalSize> for dto::TerminalDto {
    fn from(size: TerminalSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

/// The login frame shows the selected button while actions are focused
pub fn login_focus_to_dto(focus: LoginFocus, selected: LoginAction) -> dto::LoginFocusDto {
    match (focus, selected) {
        (LoginFocus::EnteringRoomId, _) => dto::LoginFocusDto::RoomId,
        (LoginFocus::ChoosingAction, LoginAction::Join) => dto::LoginFocusDto::Join,
        (LoginFocus::ChoosingAction, LoginAction::Quit) => dto::LoginFocusDto::Quit,
    }
}

impl From<ChatFocus> for dto::ChatFocusDto {
    fn from(focus: ChatFocus) -> Self {
        match focus {
            ChatFocus::MessageInput => dto::ChatFocusDto::MessageInput,
            ChatFocus::SendAction => dto::ChatFocusDto::Send,
            ChatFocus::LeaveAction => dto::ChatFocusDto::Leave,
            ChatFocus::Unfocused => dto::ChatFocusDto::Unfocused,
        }
    }
}

fn rfc3339(timestamp: Timestamp) -> String {
    timestamp_to_utc_rfc3339(timestamp.value()).unwrap_or_else(|| timestamp.value().to_string())
}

impl From<&RoomSnapshot> for RoomSummaryDto {
    fn from(snapshot: &RoomSnapshot) -> Self {
        Self {
            id: snapshot.room_id.as_str().to_string(),
            active_users: snapshot
                .active_users
                .iter()
                .map(|name| name.as_str().to_string())
                .collect(),
            message_count: snapshot.messages.len(),
            created_at: rfc3339(snapshot.created_at),
        }
    }
}

impl From<RoomSnapshot> for RoomDetailDto {
    fn from(snapshot: RoomSnapshot) -> Self {
        Self {
            id: snapshot.room_id.as_str().to_string(),
            active_users: snapshot
                .active_users
                .into_iter()
                .map(|name| name.into_string())
                .collect(),
            messages: snapshot.messages.iter().map(dto::MessageDto::from).collect(),
            created_at: rfc3339(snapshot.created_at),
        }
    }
}
