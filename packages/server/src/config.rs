//! Server command-line configuration.

use std::time::Duration;

use clap::Parser;

use crate::{domain::RoomId, error::ServerError, ui::view::login::ROOM_ID_INPUT_LIMIT};

pub const DEFAULT_PORT: u16 = 23234;

#[derive(Debug, Clone, Parser)]
#[command(name = "tsudoi-server", about = "Multi-room terminal chat server")]
pub struct ServerConfig {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to bind to
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Room to create at startup (repeatable)
    #[arg(short, long = "room", default_values_t = [String::from("public"), String::from("secret")])]
    pub rooms: Vec<String>,

    /// Seconds to wait for sessions to close on shutdown
    #[arg(long, default_value_t = 30)]
    pub shutdown_grace_secs: u64,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }

    /// Validate the configured rooms, dropping repeated ids.
    ///
    /// Ids must fit in the login form's room id field to be joinable.
    pub fn room_ids(&self) -> Result<Vec<RoomId>, ServerError> {
        let mut ids: Vec<RoomId> = Vec::with_capacity(self.rooms.len());
        for room in &self.rooms {
            let id = RoomId::new(room.clone()).map_err(|source| ServerError::InvalidRoom {
                room: room.clone(),
                source,
            })?;
            if room.chars().count() > ROOM_ID_INPUT_LIMIT {
                return Err(ServerError::RoomIdTooLongForLogin {
                    room: room.clone(),
                    max: ROOM_ID_INPUT_LIMIT,
                });
            }
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        if ids.is_empty() {
            return Err(ServerError::NoRooms);
        }
        Ok(ids)
    }
}
