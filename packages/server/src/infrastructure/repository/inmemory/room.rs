//! InMemory Room Registry 実装
//!
//! ドメイン層が定義する RoomRegistry trait の具体的な実装。
//! 起動時に構築した HashMap をインメモリ DB として使用します。
//!
//! HashMap 自体は構築後に変更しないため、ルームの検索にロックは不要です。
//! 各ルームは個別の `Mutex` で保護されるので、異なるルームへの操作は競合しません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ChatMessage, DisplayName, RegistryError, Room, RoomId, RoomRegistry, RoomSnapshot, Timestamp,
};

/// インメモリ Room Registry 実装
pub struct InMemoryRoomRegistry {
    /// ルーム ID から Room ドメインモデルへの対応（起動後は不変）
    rooms: HashMap<RoomId, Mutex<Room>>,
}

impl InMemoryRoomRegistry {
    /// 指定されたルーム ID で新しいレジストリを作成
    ///
    /// 同じ ID が複数回渡された場合は 1 つのルームにまとめられる。
    pub fn new(room_ids: impl IntoIterator<Item = RoomId>, created_at: Timestamp) -> Self {
        let rooms = room_ids
            .into_iter()
            .map(|id| (id.clone(), Mutex::new(Room::new(id, created_at))))
            .collect();
        Self { rooms }
    }

    fn room(&self, room_id: &RoomId) -> Result<&Mutex<Room>, RegistryError> {
        self.rooms
            .get(room_id)
            .ok_or_else(|| RegistryError::RoomNotFound(room_id.as_str().to_string()))
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    fn contains(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }

    fn room_ids(&self) -> Vec<RoomId> {
        let mut ids: Vec<RoomId> = self.rooms.keys().cloned().collect();
        ids.sort();
        ids
    }

    async fn append_message(
        &self,
        room_id: &RoomId,
        message: ChatMessage,
    ) -> Result<(), RegistryError> {
        let mut room = self.room(room_id)?.lock().await;
        room.append_message(message);
        Ok(())
    }

    async fn add_active_user(
        &self,
        room_id: &RoomId,
        name: DisplayName,
    ) -> Result<(), RegistryError> {
        let mut room = self.room(room_id)?.lock().await;
        room.add_active_user(name);
        Ok(())
    }

    async fn remove_active_user(
        &self,
        room_id: &RoomId,
        name: &DisplayName,
    ) -> Result<(), RegistryError> {
        let mut room = self.room(room_id)?.lock().await;
        room.remove_active_user(name);
        Ok(())
    }

    async fn snapshot(&self, room_id: &RoomId) -> Result<RoomSnapshot, RegistryError> {
        let room = self.room(room_id)?.lock().await;
        Ok(room.snapshot())
    }
}
