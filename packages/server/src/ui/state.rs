//! Shared server state.

use std::sync::Arc;

use serde::Deserialize;
use tsudoi_shared::time::Clock;

use crate::domain::RoomRegistry;

use super::shutdown::ShutdownCoordinator;

/// Query parameters for WebSocket connection
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    /// Display name for the whole connection
    pub user: String,
}

/// Shared application state
pub struct AppState {
    /// RoomRegistry（ルーム集合の抽象化）
    pub registry: Arc<dyn RoomRegistry>,
    /// Clock（メッセージ時刻の取得元）
    pub clock: Arc<dyn Clock>,
    /// 接続中セッションの終了調整
    pub shutdown: Arc<ShutdownCoordinator>,
}
