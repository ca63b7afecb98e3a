//! Per-connection session controller.
//!
//! Owns which view is active, turns view intents into registry mutations through
//! the use cases, and refreshes the chat view's working copy of the room before
//! every event it delegates (pull-based refresh).

use std::sync::Arc;

use tsudoi_shared::time::Clock;

use crate::{
    domain::{ChatMessage, DisplayName, RoomId, RoomRegistry},
    infrastructure::dto::{
        conversion::login_focus_to_dto,
        websocket::{ChatFrameDto, FrameDto, LoginFrameDto, MessageDto},
    },
    usecase::{JoinRoomUseCase, LeaveRoomUseCase, SendMessageUseCase, SyncRoomUseCase},
};

use super::{
    event::{InputEvent, Key, TerminalSize},
    view::{ChatView, Intent, LoginView},
};

/// Error shown in the login form when the requested room does not exist
pub const ROOM_NOT_FOUND_ERROR: &str = "room not found";

/// Which view currently receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Login,
    Chat,
}

/// What the transport should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    /// Render the current frame and wait for the next event
    Continue,
    /// Close the connection
    Quit,
}

/// Server-side state of one connected user.
pub struct SessionController {
    display_name: DisplayName,
    active_room_id: Option<RoomId>,
    active_view: ActiveView,
    terminal: TerminalSize,
    login: LoginView,
    chat: ChatView,
    join_room: JoinRoomUseCase,
    send_message: SendMessageUseCase,
    leave_room: LeaveRoomUseCase,
    sync_room: SyncRoomUseCase,
}

impl SessionController {
    pub fn new(
        display_name: DisplayName,
        registry: Arc<dyn RoomRegistry>,
        clock: Arc<dyn Clock>,
        terminal: TerminalSize,
    ) -> Self {
        Self {
            display_name,
            active_room_id: None,
            active_view: ActiveView::Login,
            terminal,
            login: LoginView::new(),
            chat: ChatView::new(),
            join_room: JoinRoomUseCase::new(registry.clone()),
            send_message: SendMessageUseCase::new(registry.clone(), clock),
            leave_room: LeaveRoomUseCase::new(registry.clone()),
            sync_room: SyncRoomUseCase::new(registry),
        }
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    pub fn active_room_id(&self) -> Option<&RoomId> {
        self.active_room_id.as_ref()
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn terminal(&self) -> TerminalSize {
        self.terminal
    }

    pub fn login(&self) -> &LoginView {
        &self.login
    }

    pub fn chat(&self) -> &ChatView {
        &self.chat
    }

    /// Describe what this session should display right now.
    pub fn frame(&self) -> FrameDto {
        let user_name = self.display_name.as_str().to_string();
        let terminal = self.terminal.into();
        match self.active_view {
            ActiveView::Login => FrameDto::Login(LoginFrameDto {
                user_name,
                room_id_input: self.login.room_id_input().to_string(),
                focus: login_focus_to_dto(self.login.focus(), self.login.selected_action()),
                error: self.login.form_error().map(str::to_string),
                terminal,
            }),
            ActiveView::Chat => FrameDto::Chat(ChatFrameDto {
                user_name,
                room_id: self
                    .chat
                    .room_id()
                    .map(|id| id.as_str().to_string())
                    .unwrap_or_default(),
                messages: self
                    .visible_history()
                    .iter()
                    .map(MessageDto::from)
                    .collect(),
                active_users: self
                    .chat
                    .active_users()
                    .iter()
                    .map(|name| name.as_str().to_string())
                    .collect(),
                compose: self.chat.compose().to_string(),
                focus: self.chat.focus().into(),
                scroll_offset: self.chat.scroll_offset(),
                terminal,
            }),
        }
    }

    /// Newest messages the client can show: one screen plus what is scrolled back
    fn visible_history(&self) -> &[ChatMessage] {
        let messages = self.chat.messages();
        let window = usize::from(self.terminal.height) + self.chat.scroll_offset();
        &messages[messages.len().saturating_sub(window)..]
    }

    /// Handle one inbound event.
    ///
    /// While the chat view is active the room is re-read before the event is
    /// delegated, whatever the event kind. That refresh is the only point at
    /// which this session observes other sessions' messages and roster changes.
    pub async fn handle_event(&mut self, event: InputEvent) -> SessionStep {
        match event {
            InputEvent::Key(Key::CtrlC) => {
                tracing::debug!("Interrupt from '{}'", self.display_name);
                self.disconnect().await;
                return SessionStep::Quit;
            }
            InputEvent::Resize(size) => self.terminal = size,
            _ => {}
        }

        let intent = match self.active_view {
            ActiveView::Login => self.login.handle_event(&event),
            ActiveView::Chat => {
                self.resync().await;
                self.chat.handle_event(&event)
            }
        };

        match intent {
            Some(intent) => self.apply_intent(intent).await,
            None => SessionStep::Continue,
        }
    }

    /// Replace the chat view's copy of the active room with a fresh snapshot.
    ///
    /// A missing room keeps the stale copy; this never fails the session.
    pub async fn resync(&mut self) {
        let Some(room_id) = &self.active_room_id else {
            return;
        };
        match self.sync_room.execute(room_id).await {
            Ok(snapshot) => self.chat.resync(snapshot),
            Err(e) => tracing::warn!("Failed to refresh room '{}': {}", room_id, e),
        }
    }

    /// Leave the active room, if any. Safe to call more than once.
    pub async fn disconnect(&mut self) {
        if let Some(room_id) = self.active_room_id.take() {
            if let Err(e) = self.leave_room.execute(&self.display_name, &room_id).await {
                tracing::warn!("Failed to remove '{}' from '{}': {}", self.display_name, room_id, e);
            }
            tracing::info!("'{}' left room '{}'", self.display_name, room_id);
        }
    }

    async fn apply_intent(&mut self, intent: Intent) -> SessionStep {
        match intent {
            Intent::RoomJoinRequested { room_id } => self.join(&room_id).await,
            Intent::MessageSent { text } => self.send(text).await,
            Intent::LeaveChat => self.leave().await,
            Intent::Quit => {
                self.disconnect().await;
                return SessionStep::Quit;
            }
        }
        SessionStep::Continue
    }

    async fn join(&mut self, room_id: &str) {
        match self.join_room.execute(self.display_name.clone(), room_id).await {
            Ok(snapshot) => {
                tracing::info!("'{}' joined room '{}'", self.display_name, snapshot.room_id);
                self.active_room_id = Some(snapshot.room_id.clone());
                self.chat.enter_room(snapshot);
                self.active_view = ActiveView::Chat;
            }
            Err(e) => {
                tracing::debug!("'{}' could not join '{}': {}", self.display_name, room_id, e);
                self.login.set_form_error(ROOM_NOT_FOUND_ERROR);
            }
        }
    }

    async fn send(&mut self, text: String) {
        let Some(room_id) = &self.active_room_id else {
            tracing::debug!("Dropping message from '{}': no active room", self.display_name);
            return;
        };
        match self
            .send_message
            .execute(self.display_name.clone(), room_id, text)
            .await
        {
            Ok(_) => self.resync().await,
            Err(e) => tracing::warn!("Dropping message from '{}': {}", self.display_name, e),
        }
    }

    async fn leave(&mut self) {
        self.disconnect().await;
        self.chat.leave();
        self.login.reset();
        self.active_view = ActiveView::Login;
    }
}
