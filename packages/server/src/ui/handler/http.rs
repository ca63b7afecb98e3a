//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::{RegistryError, RoomId},
    infrastructure::dto::http::{RoomDetailDto, RoomSummaryDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let mut rooms = Vec::new();
    for room_id in state.registry.room_ids() {
        match state.registry.snapshot(&room_id).await {
            Ok(snapshot) => rooms.push(RoomSummaryDto::from(&snapshot)),
            Err(e) => tracing::warn!("Skipping room '{}' in listing: {}", room_id, e),
        }
    }
    Json(rooms)
}

/// Get room detail by ID
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    let room_id = RoomId::try_from(room_id).map_err(|_| StatusCode::NOT_FOUND)?;

    match state.registry.snapshot(&room_id).await {
        Ok(snapshot) => Ok(Json(RoomDetailDto::from(snapshot))),
        Err(RegistryError::RoomNotFound(_)) => Err(StatusCode::NOT_FOUND),
    }
}
