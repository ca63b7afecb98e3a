//! WebSocket connection handlers.
//!
//! One task per connection: read an input event, let the session controller
//! handle it, send back the resulting frame. The loop also watches the server
//! shutdown flag so sessions close cleanly when the process stops.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{CloseFrame, Message, Utf8Bytes, WebSocket, WebSocketUpgrade, close_code},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    domain::DisplayName,
    infrastructure::dto::websocket::{FrameDto, InputEventDto},
    ui::{
        event::{InputEvent, TerminalSize},
        session::{SessionController, SessionStep},
        state::{AppState, ConnectQuery},
    },
};

const SHUTDOWN_REASON: &str = "server shutting down";
const QUIT_REASON: &str = "bye";

type WsSender = SplitSink<WebSocket, Message>;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    // Convert String -> DisplayName (Domain Model)
    let display_name = match DisplayName::try_from(query.user) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!("Rejecting connection with invalid user name: {}", e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    if state.shutdown.is_stopping() {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(ws.on_upgrade(move |socket| {
        let session_id = Uuid::new_v4();
        let span = tracing::info_span!("session", %session_id, user = %display_name);
        handle_socket(socket, state, display_name).instrument(span)
    }))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, display_name: DisplayName) {
    // Register this connection for graceful shutdown tracking
    let (_guard, mut shutdown_rx) = state.shutdown.register();

    let (mut sender, mut receiver) = socket.split();
    let mut session = SessionController::new(
        display_name,
        state.registry.clone(),
        state.clock.clone(),
        TerminalSize::default(),
    );
    tracing::info!("Session started");

    if *shutdown_rx.borrow() {
        close(&mut sender, SHUTDOWN_REASON).await;
        return;
    }

    if let Err(e) = send_frame(&mut sender, &session.frame()).await {
        tracing::warn!("Failed to send initial frame: {}", e);
        return;
    }

    loop {
        tokio::select! {
            msg = receiver.next() => {
                let event = match msg {
                    Some(Ok(Message::Text(text))) => match decode_event(&text) {
                        Some(event) => event,
                        None => continue,
                    },
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::info!("Client closed the connection");
                        break;
                    }
                    Some(Ok(_)) => continue, // Ping/Pong handled automatically
                    Some(Err(e)) => {
                        tracing::warn!("WebSocket error: {}", e);
                        break;
                    }
                };

                match session.handle_event(event).await {
                    SessionStep::Continue => {
                        if let Err(e) = send_frame(&mut sender, &session.frame()).await {
                            tracing::warn!("Failed to send frame: {}", e);
                            break;
                        }
                    }
                    SessionStep::Quit => {
                        close(&mut sender, QUIT_REASON).await;
                        break;
                    }
                }
            }

            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    tracing::debug!("Session received shutdown signal, closing");
                    close(&mut sender, SHUTDOWN_REASON).await;
                    break;
                }
            }
        }
    }

    // Every exit path leaves the active room, whatever closed the connection
    session.disconnect().await;
    tracing::info!("Session ended");
    // _guard is dropped here, decrementing the active session count
}

fn decode_event(text: &Utf8Bytes) -> Option<InputEvent> {
    let dto = match serde_json::from_str::<InputEventDto>(text.as_str()) {
        Ok(dto) => dto,
        Err(e) => {
            tracing::warn!("Ignoring malformed input event: {}", e);
            return None;
        }
    };
    match InputEvent::try_from(dto) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::warn!("Ignoring invalid input event: {}", e);
            None
        }
    }
}

async fn send_frame(sender: &mut WsSender, frame: &FrameDto) -> Result<(), axum::Error> {
    let json = serde_json::to_string(frame).map_err(axum::Error::new)?;
    sender.send(Message::Text(json.into())).await
}

/// Send a final `closed` frame followed by a close message
async fn close(sender: &mut WsSender, reason: &str) {
    let frame = FrameDto::Closed {
        reason: reason.to_string(),
    };
    if let Err(e) = send_frame(sender, &frame).await {
        tracing::debug!("Failed to send closed frame: {}", e);
    }
    let close_frame = CloseFrame {
        code: close_code::NORMAL,
        reason: Utf8Bytes::from(reason.to_string()),
    };
    if let Err(e) = sender.send(Message::Close(Some(close_frame))).await {
        tracing::debug!("Failed to send close message: {}", e);
    }
    if let Err(e) = sender.flush().await {
        tracing::debug!("Failed to flush WebSocket: {}", e);
    }
}
