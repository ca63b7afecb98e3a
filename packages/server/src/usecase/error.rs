//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RegistryError, ValueObjectError};

/// ルーム参加のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinRoomError {
    /// ルーム ID の形式が不正
    #[error("invalid room id: {0}")]
    InvalidRoomId(#[from] ValueObjectError),

    /// ルームが Registry に存在しない
    #[error("room not found")]
    RoomNotFound(String),
}

/// メッセージ送信のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// メッセージ内容が不正（空、または長すぎる）
    #[error("invalid message: {0}")]
    InvalidContent(#[from] ValueObjectError),

    /// 送信先のルームが存在しない
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
