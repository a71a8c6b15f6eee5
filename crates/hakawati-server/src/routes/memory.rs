//! Memory Routes - Read-only view of character memory
//!
//! Mounted only when `HAKAWATI_API_KEY` is set.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use hakawati::MemoryEntry;

use crate::error::ApiError;
use crate::AppState;

/// Get the stored memory for a character
#[utoipa::path(
    get,
    path = "/api/memory/{name}",
    params(("name" = String, Path, description = "Character name")),
    responses(
        (status = 200, description = "Memory entry", body = MemoryEntry),
        (status = 404, description = "Character not remembered")
    ),
    tag = "Memory"
)]
pub async fn get_memory(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MemoryEntry>, ApiError> {
    let entry = state
        .persona_service
        .memory_of(&name)
        .await
        .map_err(|e| ApiError::Memory(e.to_string()))?;

    entry.map(Json).ok_or(ApiError::CharacterNotFound(name))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/memory/:name", get(get_memory))
}
