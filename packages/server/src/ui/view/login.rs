//! Login flow: collect a room id, then join or quit.

use crate::ui::event::{InputEvent, Key};

use super::Intent;

/// Maximum number of characters accepted in the room id field
pub const ROOM_ID_INPUT_LIMIT: usize = 9;

/// Error shown when "join" is confirmed with an empty room id
pub const EMPTY_ROOM_ID_ERROR: &str = "room id empty";

/// Which element of the login form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    EnteringRoomId,
    ChoosingAction,
}

/// The two actions offered once the room id is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    Join,
    Quit,
}

impl LoginAction {
    fn toggle(self) -> Self {
        match self {
            LoginAction::Join => LoginAction::Quit,
            LoginAction::Quit => LoginAction::Join,
        }
    }
}

/// Login view state
#[derive(Debug, Clone)]
pub struct LoginView {
    focus: LoginFocus,
    selected_action: LoginAction,
    room_id_input: String,
    form_error: Option<String>,
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginView {
    pub fn new() -> Self {
        Self {
            focus: LoginFocus::EnteringRoomId,
            selected_action: LoginAction::Join,
            room_id_input: String::new(),
            form_error: None,
        }
    }

    pub fn focus(&self) -> LoginFocus {
        self.focus
    }

    pub fn selected_action(&self) -> LoginAction {
        self.selected_action
    }

    pub fn room_id_input(&self) -> &str {
        &self.room_id_input
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Show `error` under the form and move focus back to the room id field
    pub fn set_form_error(&mut self, error: impl Into<String>) {
        self.form_error = Some(error.into());
        self.focus = LoginFocus::EnteringRoomId;
    }

    /// Return to the initial state (used when the session leaves a room)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Apply one input event. Only key presses affect the login form.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<Intent> {
        match event {
            InputEvent::Key(key) => self.handle_key(*key),
            InputEvent::Resize(_) | InputEvent::Mouse { .. } => None,
        }
    }

    fn handle_key(&mut self, key: Key) -> Option<Intent> {
        match (self.focus, key) {
            (_, Key::Tab) => {
                self.focus_next();
                None
            }
            (_, Key::BackTab) => {
                self.focus_prev();
                None
            }
            (LoginFocus::EnteringRoomId, Key::Enter) => {
                self.focus = LoginFocus::ChoosingAction;
                None
            }
            (LoginFocus::EnteringRoomId, Key::Char(ch)) => {
                if self.room_id_input.chars().count() < ROOM_ID_INPUT_LIMIT {
                    self.room_id_input.push(ch);
                }
                None
            }
            (LoginFocus::EnteringRoomId, Key::Backspace) => {
                self.room_id_input.pop();
                None
            }
            (
                LoginFocus::ChoosingAction,
                Key::Left | Key::Right | Key::Char('h') | Key::Char('l'),
            ) => {
                self.selected_action = self.selected_action.toggle();
                None
            }
            (LoginFocus::ChoosingAction, Key::Enter) => self.confirm_action(),
            _ => None,
        }
    }

    fn confirm_action(&mut self) -> Option<Intent> {
        match self.selected_action {
            LoginAction::Quit => Some(Intent::Quit),
            LoginAction::Join if self.room_id_input.is_empty() => {
                self.set_form_error(EMPTY_ROOM_ID_ERROR);
                None
            }
            LoginAction::Join => Some(Intent::RoomJoinRequested {
                room_id: self.room_id_input.clone(),
            }),
        }
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginFocus::EnteringRoomId => LoginFocus::ChoosingAction,
            LoginFocus::ChoosingAction => LoginFocus::EnteringRoomId,
        };
    }

    fn focus_prev(&mut self) {
        self.focus = match self.focus {
            LoginFocus::ChoosingAction => LoginFocus::EnteringRoomId,
            LoginFocus::EnteringRoomId => LoginFocus::ChoosingAction,
        };
    }
}
