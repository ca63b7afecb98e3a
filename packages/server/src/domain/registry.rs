//! Room registry trait 定義
//!
//! ドメイン層が必要とするルームへのアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ChatMessage, DisplayName, RegistryError, RoomId, RoomSnapshot};

/// Room Registry trait
///
/// プロセス起動時に一度だけ構築され、全セッションに注入されるルームの集合。
/// ルームの追加・削除は行わない。各ルームは自身のロックで保護され、
/// 以下の操作はルーム単位でそれぞれアトミックに実行される（操作間のトランザクションはない）。
///
/// 未登録の `room_id` を渡した場合は `RegistryError::RoomNotFound` を返す。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// ルームが登録されているか確認する（Lookup）
    fn contains(&self, room_id: &RoomId) -> bool;

    /// 登録済みの全ルーム ID を取得（ソート済み）
    fn room_ids(&self) -> Vec<RoomId>;

    /// メッセージをルームの履歴に追加
    async fn append_message(
        &self,
        room_id: &RoomId,
        message: ChatMessage,
    ) -> Result<(), RegistryError>;

    /// アクティブユーザーを追加（重複チェックなし）
    async fn add_active_user(
        &self,
        room_id: &RoomId,
        name: DisplayName,
    ) -> Result<(), RegistryError>;

    /// アクティブユーザーを 1 件削除（存在しない場合は何もしない）
    async fn remove_active_user(
        &self,
        room_id: &RoomId,
        name: &DisplayName,
    ) -> Result<(), RegistryError>;

    /// ルームの現在の状態のスナップショットを取得
    async fn snapshot(&self, room_id: &RoomId) -> Result<RoomSnapshot, RegistryError>;
}
