//! Test fixtures shared by the integration tests.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tsudoi_server::{
    Server, domain::RoomId, domain::Timestamp, infrastructure::repository::InMemoryRoomRegistry,
};
use tsudoi_shared::time::SystemClock;

/// In-process server on an ephemeral port, stopped on drop
pub struct TestServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Start a server with the rooms "public" and "secret"
    pub async fn start() -> Self {
        Self::start_with_rooms(&["public", "secret"]).await
    }

    pub async fn start_with_rooms(rooms: &[&str]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to get local addr");

        let room_ids = rooms
            .iter()
            .map(|room| RoomId::new(room.to_string()).expect("Invalid room id"));
        let registry = Arc::new(InMemoryRoomRegistry::new(room_ids, Timestamp::new(0)));
        let server = Server::new(registry, Arc::new(SystemClock), Duration::from_secs(2));

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let shutdown = async move {
                let _ = shutdown_rx.await;
            };
            if let Err(e) = server.run(listener, shutdown).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self, user: &str) -> String {
        format!("ws://{}/ws?user={}", self.addr, user)
    }

    /// Request shutdown and wait for the server task to finish
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
