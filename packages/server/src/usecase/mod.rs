//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! セッションコントローラー（UI 層）から呼び出され、Room Registry を操作します。

pub mod error;
pub mod join_room;
pub mod leave_room;
pub mod send_message;
pub mod sync_room;

pub use error::{JoinRoomError, SendMessageError};
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use send_message::SendMessageUseCase;
pub use sync_room::SyncRoomUseCase;
