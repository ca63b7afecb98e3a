//! Server execution logic.

use std::{future::Future, sync::Arc, time::Duration};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tsudoi_shared::time::Clock;

use crate::{domain::RoomRegistry, error::ServerError};

use super::{
    handler::{get_room_detail, get_rooms, health_check, websocket_handler},
    shutdown::ShutdownCoordinator,
    state::AppState,
};

/// Multi-room terminal chat server
///
/// # Example
///
/// ```ignore
/// let registry = Arc::new(InMemoryRoomRegistry::new(room_ids, Timestamp::new(now)));
/// let server = Server::new(registry, Arc::new(SystemClock), Duration::from_secs(30));
/// let listener = TcpListener::bind("127.0.0.1:23234").await?;
/// server.run(listener, shutdown_signal()).await?;
/// ```
pub struct Server {
    /// RoomRegistry（起動時に構築済みのルーム集合）
    registry: Arc<dyn RoomRegistry>,
    /// Clock（メッセージ時刻の取得元）
    clock: Arc<dyn Clock>,
    /// 終了要求後、セッションの終了を待つ最大時間
    shutdown_grace: Duration,
}

impl Server {
    pub fn new(
        registry: Arc<dyn RoomRegistry>,
        clock: Arc<dyn Clock>,
        shutdown_grace: Duration,
    ) -> Self {
        Self {
            registry,
            clock,
            shutdown_grace,
        }
    }

    /// Serve on `listener` until `shutdown` resolves.
    ///
    /// Once `shutdown` resolves the listener stops accepting, every session is
    /// told to close, and this waits up to the grace period for them to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if serving fails.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let coordinator = Arc::new(ShutdownCoordinator::new());
        let app_state = Arc::new(AppState {
            registry: self.registry,
            clock: self.clock,
            shutdown: coordinator.clone(),
        });

        // Define handlers
        let app = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .route("/api/rooms/{room_id}", get(get_room_detail))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        let local_addr = listener.local_addr()?;
        tracing::info!("Chat server listening on {}", local_addr);
        tracing::info!("Connect to: ws://{}/ws?user=<name>", local_addr);

        let trigger = {
            let coordinator = coordinator.clone();
            async move {
                shutdown.await;
                tracing::info!(
                    "Closing {} active session(s)",
                    coordinator.active_sessions()
                );
                coordinator.trigger();
            }
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(trigger)
            .await?;

        if !coordinator.wait_for_drain(self.shutdown_grace).await {
            tracing::warn!(
                "{} session(s) still active after {:?}; dropping them",
                coordinator.active_sessions(),
                self.shutdown_grace
            );
        }

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
