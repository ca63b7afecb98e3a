//! Infrastructure layer
//!
//! ドメイン層が定義するインターフェースの具体的な実装（インメモリのルームレジストリ）と、
//! 外部とやり取りするための DTO を提供します。

pub mod dto;
pub mod repository;
