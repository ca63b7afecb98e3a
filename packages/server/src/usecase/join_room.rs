//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - ルームの検索、アクティブユーザーへの追加、スナップショットの取得
//!
//! ### なぜこのテストが必要か
//! - 存在しないルームへの参加はユーザーに見えるエラーとして扱う必要がある
//! - 参加時にルームが新規作成されないことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録済みルームへの参加
//! - 異常系：存在しないルーム、不正なルーム ID
//! - エッジケース：同じ名前での重複参加（重複エントリを許容）

use std::sync::Arc;

use crate::domain::{DisplayName, RoomId, RoomRegistry, RoomSnapshot};

use super::error::JoinRoomError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Registry（ルームへのアクセスの抽象化）
    registry: Arc<dyn RoomRegistry>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// ルーム参加を実行
    ///
    /// # Arguments
    ///
    /// * `name` - 参加するユーザーの表示名（Domain Model）
    /// * `room_id` - ログインフォームに入力されたルーム ID
    ///
    /// # Returns
    ///
    /// * `Ok(RoomSnapshot)` - 参加後のルームのスナップショット（自分自身を含む）
    /// * `Err(JoinRoomError)` - ルームが存在しない、または ID が不正
    pub async fn execute(
        &self,
        name: DisplayName,
        room_id: &str,
    ) -> Result<RoomSnapshot, JoinRoomError> {
        // 1. ルーム ID を検証
        let room_id = RoomId::new(room_id.to_string())?;

        // 2. ルームを検索（Registry は起動後に変化しないため、新規作成はしない）
        if !self.registry.contains(&room_id) {
            return Err(JoinRoomError::RoomNotFound(room_id.into_string()));
        }

        // 3. アクティブユーザーに追加（重複チェックなし）
        self.registry
            .add_active_user(&room_id, name)
            .await
            .map_err(|_| JoinRoomError::RoomNotFound(room_id.as_str().to_string()))?;

        // 4. 参加後のスナップショットを取得
        self.registry
            .snapshot(&room_id)
            .await
            .map_err(|_| JoinRoomError::RoomNotFound(room_id.as_str().to_string()))
    }
}
