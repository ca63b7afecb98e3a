//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{Error as WsError, protocol::Message},
};
use tsudoi_server::infrastructure::dto::websocket::{FrameDto, InputEventDto, KeyDto};

use crate::{
    error::ClientError,
    formatter::FrameFormatter,
    input::{HELP, ParsedLine, parse_line},
    pending::PendingFrames,
    ui::redisplay_prompt,
};

/// Run one chat session until the server closes it or the user quits
pub async fn run_client_session(url: &str, user: &str) -> Result<(), ClientError> {
    // Construct URL with the display name as query parameter
    let url = format!("{}?user={}", url, urlencoding::encode(user));

    let (ws_stream, _) = match connect_async(&url).await {
        Ok(result) => result,
        Err(WsError::Http(response)) => {
            return Err(ClientError::Rejected(response.status().as_u16()));
        }
        Err(e) => return Err(ClientError::ConnectionError(e.to_string())),
    };

    tracing::info!("Connected to chat server!");
    println!(
        "\nYou are '{}'. Type /help for commands. Press Ctrl+C to exit.\n",
        user
    );

    let (mut write, mut read) = ws_stream.split();

    let user_for_read = user.to_string();
    let pending = PendingFrames::new();
    let pending_for_read = pending.clone();

    // Spawn a task to render incoming frames
    let mut read_task = tokio::spawn(async move {
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => match serde_json::from_str::<FrameDto>(text.as_str()) {
                    Ok(frame) => {
                        let closed = matches!(frame, FrameDto::Closed { .. });
                        if !pending_for_read.frame_received(closed) {
                            continue;
                        }
                        print!("{}", FrameFormatter::format_frame(&frame));
                        if closed {
                            return Ok(());
                        }
                        redisplay_prompt(&user_for_read);
                    }
                    Err(e) => tracing::warn!("Ignoring unexpected frame: {}", e),
                },
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    return Err(ClientError::ConnectionError(e.to_string()));
                }
                _ => {}
            }
        }
        Err(ClientError::ConnectionError("Connection lost".to_string()))
    });

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<Vec<InputEventDto>>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let prompt = format!("{}> ", user);
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            let events = match rl.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str()).ok();
                    }
                    match parse_line(&line) {
                        Ok(ParsedLine::Events(events)) => events,
                        Ok(ParsedLine::Help) => {
                            println!("{}", HELP);
                            continue;
                        }
                        Err(e) => {
                            println!("{}", e);
                            continue;
                        }
                    }
                }
                // Ctrl+C / Ctrl+D end the session the same way /quit does
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    vec![InputEventDto::Key {
                        key: KeyDto::CtrlC,
                        ch: None,
                    }]
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            };
            let quitting = events.iter().any(|event| {
                matches!(
                    event,
                    InputEventDto::Key {
                        key: KeyDto::CtrlC,
                        ..
                    }
                )
            });
            if input_tx.send(events).is_err() || quitting {
                // Channel closed or session ending, exit thread
                break;
            }
        }
    });

    // Spawn a task to send typed events to the server
    let mut write_task = tokio::spawn(async move {
        while let Some(events) = input_rx.recv().await {
            for event in events {
                let json = match serde_json::to_string(&event) {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::error!("Failed to serialize event: {}", e);
                        continue;
                    }
                };
                pending.event_sent();
                if let Err(e) = write.send(Message::Text(json.into())).await {
                    tracing::warn!("Failed to send event: {}", e);
                    return Err(ClientError::ConnectionError(e.to_string()));
                }
            }
        }
        Ok(())
    });

    // The session ends when the server stops sending frames
    tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            read_result.unwrap_or_else(|e| Err(ClientError::ConnectionError(e.to_string())))
        }
        write_result = &mut write_task => {
            match write_result.unwrap_or_else(|e| Err(ClientError::ConnectionError(e.to_string()))) {
                // Input ended without a quit; wait for the server to finish
                Ok(()) => read_task
                    .await
                    .unwrap_or_else(|e| Err(ClientError::ConnectionError(e.to_string()))),
                Err(e) => {
                    read_task.abort();
                    Err(e)
                }
            }
        }
    }
}
