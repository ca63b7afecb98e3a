//! UseCase: ルーム状態の再同期
//!
//! セッションが表示用に保持するルームの作業コピーを、Registry の現在の状態で置き換えるために使う。
//! 取得したスナップショットは、他のセッションが変更した時点で古くなる。

use std::sync::Arc;

use crate::domain::{RegistryError, RoomId, RoomRegistry, RoomSnapshot};

/// ルーム状態取得のユースケース
pub struct SyncRoomUseCase {
    /// Registry（ルームへのアクセスの抽象化）
    registry: Arc<dyn RoomRegistry>,
}

impl SyncRoomUseCase {
    /// 新しい SyncRoomUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// ルームの現在のスナップショットを取得
    pub async fn execute(&self, room_id: &RoomId) -> Result<RoomSnapshot, RegistryError> {
        self.registry.snapshot(room_id).await
    }
}
