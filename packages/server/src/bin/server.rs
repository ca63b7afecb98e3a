//! Multi-room terminal chat server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin tsudoi-server -- --port 23234 --room public --room secret
//! ```

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tsudoi_server::{
    Server, ServerConfig, ServerError,
    domain::{RoomRegistry, Timestamp},
    infrastructure::repository::InMemoryRoomRegistry, ui::shutdown_signal,
};
use tsudoi_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let room_ids = config.room_ids()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let registry = Arc::new(InMemoryRoomRegistry::new(
        room_ids,
        Timestamp::new(clock.now_utc_millis()),
    ));
    tracing::info!(
        "Rooms: {}",
        registry
            .room_ids()
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    Server::new(registry, clock, config.shutdown_grace())
        .run(listener, shutdown_signal())
        .await
}
