//! UseCase: ルーム退出処理

use std::sync::Arc;

use crate::domain::{DisplayName, RegistryError, RoomId, RoomRegistry};

/// ルーム退出のユースケース
pub struct LeaveRoomUseCase {
    /// Registry（ルームへのアクセスの抽象化）
    registry: Arc<dyn RoomRegistry>,
}

impl LeaveRoomUseCase {
    /// 新しい LeaveRoomUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// ルーム退出を実行
    ///
    /// アクティブユーザーから `name` を 1 件削除する。既にいない場合は何もしない。
    pub async fn execute(&self, name: &DisplayName, room_id: &RoomId) -> Result<(), RegistryError> {
        self.registry.remove_active_user(room_id, name).await
    }
}
