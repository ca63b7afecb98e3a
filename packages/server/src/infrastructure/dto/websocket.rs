//! WebSocket DTOs.
//!
//! Clients send [`InputEventDto`] as JSON text frames. After each handled event
//! the server answers with one [`FrameDto`] describing what to display.

use serde::{Deserialize, Serialize};

/// Key identifiers accepted in `{"type":"key"}` events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyDto {
    /// Printable character, carried in `ch`
    Char,
    Backspace,
    Enter,
    Tab,
    BackTab,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Esc,
    CtrlC,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MouseKindDto {
    WheelUp,
    WheelDown,
    Move,
}

/// Inbound input event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InputEventDto {
    Key {
        key: KeyDto,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ch: Option<char>,
    },
    Resize {
        width: u16,
        height: u16,
    },
    Mouse {
        kind: MouseKindDto,
        x: u16,
        y: u16,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalDto {
    pub width: u16,
    pub height: u16,
}

/// Login form focus as shown to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoginFocusDto {
    RoomId,
    Join,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChatFocusDto {
    MessageInput,
    Send,
    Leave,
    Unfocused,
}

/// Chat message as shown to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub author: String,
    pub text: String,
    /// Unix timestamp (milliseconds since epoch, UTC)
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginFrameDto {
    pub user_name: String,
    pub room_id_input: String,
    pub focus: LoginFocusDto,
    pub error: Option<String>,
    pub terminal: TerminalDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatFrameDto {
    pub user_name: String,
    pub room_id: String,
    pub messages: Vec<MessageDto>,
    pub active_users: Vec<String>,
    pub compose: String,
    pub focus: ChatFocusDto,
    /// Number of messages scrolled back from the newest one
    pub scroll_offset: usize,
    pub terminal: TerminalDto,
}

/// Outbound frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum FrameDto {
    Login(LoginFrameDto),
    Chat(ChatFrameDto),
    Closed { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_event_wire_format() {
        // テスト項目: 入力イベントの JSON 形式がクライアントとの取り決め通りにデシリアライズされる
        // given (前提条件):
        let key = r#"{"type":"key","key":"char","ch":"a"}"#;
        let back_tab = r#"{"type":"key","key":"back-tab"}"#;
        let resize = r#"{"type":"resize","width":120,"height":40}"#;
        let mouse = r#"{"type":"mouse","kind":"wheel-up","x":3,"y":4}"#;

        // when (操作):
        let key: InputEventDto = serde_json::from_str(key).unwrap();
        let back_tab: InputEventDto = serde_json::from_str(back_tab).unwrap();
        let resize: InputEventDto = serde_json::from_str(resize).unwrap();
        let mouse: InputEventDto = serde_json::from_str(mouse).unwrap();

        // then (期待する結果):
        assert_eq!(
            key,
            InputEventDto::Key {
                key: KeyDto::Char,
                ch: Some('a')
            }
        );
        assert_eq!(
            back_tab,
            InputEventDto::Key {
                key: KeyDto::BackTab,
                ch: None
            }
        );
        assert_eq!(
            resize,
            InputEventDto::Resize {
                width: 120,
                height: 40
            }
        );
        assert_eq!(
            mouse,
            InputEventDto::Mouse {
                kind: MouseKindDto::WheelUp,
                x: 3,
                y: 4
            }
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        // テスト項目: 未知のキー名はデシリアライズエラーになる
        // given (前提条件):
        let json = r#"{"type":"key","key":"f13"}"#;

        // when (操作):
        let result = serde_json::from_str::<InputEventDto>(json);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_frame_is_tagged_by_view() {
        // テスト項目: フレームは "view" フィールドでビュー種別を示す
        // given (前提条件):
        let frame = FrameDto::Closed {
            reason: "server shutting down".to_string(),
        };

        // when (操作):
        let json = serde_json::to_value(&frame).unwrap();

        // then (期待する結果):
        assert_eq!(json["view"], "closed");
        assert_eq!(json["reason"], "server shutting down");
    }
}
