//! Chat flow: compose and send messages, browse history, leave the room.

use crate::{
    domain::{ChatMessage, DisplayName, MESSAGE_CONTENT_MAX_LEN, RoomId, RoomSnapshot},
    ui::event::{InputEvent, Key, MouseKind},
};

use super::Intent;

/// Number of messages scrolled by page up / page down
pub const HISTORY_PAGE_SIZE: usize = 10;

/// Focus ring of the chat view. Tab walks it forward, shift-tab backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatFocus {
    MessageInput,
    SendAction,
    LeaveAction,
    /// No control focused: navigation input scrolls the message history
    Unfocused,
}

impl ChatFocus {
    fn next(self) -> Self {
        match self {
            ChatFocus::MessageInput => ChatFocus::SendAction,
            ChatFocus::SendAction => ChatFocus::LeaveAction,
            ChatFocus::LeaveAction => ChatFocus::Unfocused,
            ChatFocus::Unfocused => ChatFocus::MessageInput,
        }
    }

    fn prev(self) -> Self {
        match self {
            ChatFocus::MessageInput => ChatFocus::Unfocused,
            ChatFocus::SendAction => ChatFocus::MessageInput,
            ChatFocus::LeaveAction => ChatFocus::SendAction,
            ChatFocus::Unfocused => ChatFocus::LeaveAction,
        }
    }
}

/// Chat view state together with its working copy of the room.
#[derive(Debug, Clone)]
pub struct ChatView {
    focus: ChatFocus,
    compose: String,
    room_id: Option<RoomId>,
    messages: Vec<ChatMessage>,
    active_users: Vec<DisplayName>,
    /// Messages hidden below the bottom of the history viewer
    scroll_offset: usize,
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView {
    pub fn new() -> Self {
        Self {
            focus: ChatFocus::MessageInput,
            compose: String::new(),
            room_id: None,
            messages: Vec::new(),
            active_users: Vec::new(),
            scroll_offset: 0,
        }
    }

    pub fn focus(&self) -> ChatFocus {
        self.focus
    }

    pub fn compose(&self) -> &str {
        &self.compose
    }

    pub fn room_id(&self) -> Option<&RoomId> {
        self.room_id.as_ref()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn active_users(&self) -> &[DisplayName] {
        &self.active_users
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Start a fresh chat in the room described by `snapshot`
    pub fn enter_room(&mut self, snapshot: RoomSnapshot) {
        *self = Self::new();
        self.room_id = Some(snapshot.room_id.clone());
        self.resync(snapshot);
    }

    /// Replace the working copy of the room with `snapshot`
    pub fn resync(&mut self, snapshot: RoomSnapshot) {
        self.messages = snapshot.messages;
        self.active_users = snapshot.active_users;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    /// Drop the room and all local state
    pub fn leave(&mut self) {
        *self = Self::new();
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<Intent> {
        match *event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse { kind, .. } if self.focus == ChatFocus::Unfocused => {
                match kind {
                    MouseKind::WheelUp => self.scroll_up(1),
                    MouseKind::WheelDown => self.scroll_down(1),
                    MouseKind::Move => {}
                }
                None
            }
            InputEvent::Mouse { .. } | InputEvent::Resize(_) => None,
        }
    }

    fn handle_key(&mut self, key: Key) -> Option<Intent> {
        match (self.focus, key) {
            (_, Key::Tab) => {
                self.focus = self.focus.next();
                None
            }
            (_, Key::BackTab) => {
                self.focus = self.focus.prev();
                None
            }
            (_, Key::Esc) => {
                self.focus = ChatFocus::Unfocused;
                None
            }
            (ChatFocus::MessageInput, Key::Char(ch)) => {
                if self.compose.len() + ch.len_utf8() <= MESSAGE_CONTENT_MAX_LEN {
                    self.compose.push(ch);
                }
                None
            }
            (ChatFocus::MessageInput, Key::Backspace) => {
                self.compose.pop();
                None
            }
            (ChatFocus::MessageInput | ChatFocus::SendAction, Key::Enter) => self.submit(),
            (ChatFocus::LeaveAction, Key::Enter) => Some(Intent::LeaveChat),
            (ChatFocus::Unfocused, Key::Enter) => {
                self.focus = ChatFocus::MessageInput;
                None
            }
            (ChatFocus::Unfocused, Key::Up) => {
                self.scroll_up(1);
                None
            }
            (ChatFocus::Unfocused, Key::Down) => {
                self.scroll_down(1);
                None
            }
            (ChatFocus::Unfocused, Key::PageUp) => {
                self.scroll_up(HISTORY_PAGE_SIZE);
                None
            }
            (ChatFocus::Unfocused, Key::PageDown) => {
                self.scroll_down(HISTORY_PAGE_SIZE);
                None
            }
            _ => None,
        }
    }

    fn submit(&mut self) -> Option<Intent> {
        if self.compose.is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.compose);
        self.focus = ChatFocus::MessageInput;
        Some(Intent::MessageSent { text })
    }

    fn max_scroll_offset(&self) -> usize {
        self.messages.len().saturating_sub(1)
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.max_scroll_offset());
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}
