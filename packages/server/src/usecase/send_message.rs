//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - メッセージの生成（送信者名・本文・時刻）とルームの履歴への追加
//!
//! ### なぜこのテストが必要か
//! - メッセージは送信順に、時刻が単調非減少で保存される必要がある
//! - 存在しないルームへの送信でパニックしないことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：連続したメッセージ送信
//! - 異常系：空のメッセージ、ルームが存在しない（Registry のモックで再現）

use std::sync::Arc;

use tsudoi_shared::time::Clock;

use crate::domain::{ChatMessage, DisplayName, MessageContent, RoomId, RoomRegistry, Timestamp};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Registry（ルームへのアクセスの抽象化）
    registry: Arc<dyn RoomRegistry>,
    /// メッセージの時刻を決める Clock
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `author` - 送信者の表示名（Domain Model）
    /// * `room_id` - 送信先ルームの ID（Domain Model）
    /// * `text` - メッセージ本文
    ///
    /// # Returns
    ///
    /// * `Ok(ChatMessage)` - ルームに追加されたメッセージ
    /// * `Err(SendMessageError)` - 本文が不正、またはルームが存在しない
    pub async fn execute(
        &self,
        author: DisplayName,
        room_id: &RoomId,
        text: String,
    ) -> Result<ChatMessage, SendMessageError> {
        let content = MessageContent::new(text)?;
        let timestamp = Timestamp::new(self.clock.now_utc_millis());
        let message = ChatMessage::new(author, content, timestamp);

        self.registry
            .append_message(room_id, message.clone())
            .await?;

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MockRoomRegistry, RegistryError, ValueObjectError},
        infrastructure::repository::InMemoryRoomRegistry,
    };
    use tsudoi_shared::time::{FixedClock, SteppingClock};

    fn public() -> RoomId {
        RoomId::new("public".to_string()).unwrap()
    }

    fn alice() -> DisplayName {
        DisplayName::new("alice".to_string()).unwrap()
    }

    fn create_test_registry() -> Arc<InMemoryRoomRegistry> {
        Arc::new(InMemoryRoomRegistry::new([public()], Timestamp::new(0)))
    }

    #[tokio::test]
    async fn test_send_message_success() {
        // テスト項目: メッセージが送信者名・本文・時刻付きでルームに追加される
        // given (前提条件):
        let registry = create_test_registry();
        let usecase = SendMessageUseCase::new(registry.clone(), Arc::new(FixedClock::new(42)));

        // when (操作):
        let result = usecase.execute(alice(), &public(), "hi".to_string()).await;

        // then (期待する結果):
        let message = result.unwrap();
        assert_eq!(message.author, alice());
        assert_eq!(message.content.as_str(), "hi");
        assert_eq!(message.timestamp, Timestamp::new(42));

        let snapshot = registry.snapshot(&public()).await.unwrap();
        assert_eq!(snapshot.messages, vec![message]);
    }

    #[tokio::test]
    async fn test_send_three_messages_in_order() {
        // テスト項目: 連続して送信した 3 件が送信順・時刻の単調非減少で保存される
        // given (前提条件):
        let registry = create_test_registry();
        let usecase =
            SendMessageUseCase::new(registry.clone(), Arc::new(SteppingClock::new(1000, 1)));

        // when (操作):
        for text in ["one", "two", "three"] {
            usecase
                .execute(alice(), &public(), text.to_string())
                .await
                .unwrap();
        }

        // then (期待する結果):
        let snapshot = registry.snapshot(&public()).await.unwrap();
        let texts: Vec<&str> = snapshot
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert!(
            snapshot
                .messages
                .windows(2)
                .all(|pair| pair[0].timestamp <= pair[1].timestamp)
        );
    }

    #[tokio::test]
    async fn test_send_empty_message_fails() {
        // テスト項目: 空のメッセージは追加されない
        // given (前提条件):
        let registry = create_test_registry();
        let usecase = SendMessageUseCase::new(registry.clone(), Arc::new(FixedClock::new(0)));

        // when (操作):
        let result = usecase.execute(alice(), &public(), String::new()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(SendMessageError::InvalidContent(
                ValueObjectError::MessageContentEmpty
            ))
        );
        assert!(registry.snapshot(&public()).await.unwrap().messages.is_empty());
    }

    #[tokio::test]
    async fn test_send_to_missing_room_returns_error() {
        // テスト項目: Registry がルームを見つけられない場合はエラーを返す（パニックしない）
        // given (前提条件):
        let mut registry = MockRoomRegistry::new();
        registry
            .expect_append_message()
            .times(1)
            .returning(|room_id, _| Err(RegistryError::RoomNotFound(room_id.to_string())));
        let usecase = SendMessageUseCase::new(Arc::new(registry), Arc::new(FixedClock::new(0)));

        // when (操作):
        let result = usecase.execute(alice(), &public(), "hi".to_string()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(SendMessageError::Registry(RegistryError::RoomNotFound(
                "public".to_string()
            )))
        );
    }
}
