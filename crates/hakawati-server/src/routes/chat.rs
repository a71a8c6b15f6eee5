//! Chat Routes - In-character replies

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{ChatRequest, ChatResponse};
use crate::AppState;

/// Reply as the character to a user message
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Character reply", body = ChatResponse),
        (status = 500, description = "Model call failed", body = crate::models::ChatErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::Chat(e.body_text()))?;

    let outcome = state
        .persona_service
        .chat(
            &payload.character,
            &payload.message,
            &payload.history,
            payload.api_key.as_deref(),
        )
        .await
        .map_err(|e| ApiError::Chat(e.to_string()))?;

    Ok(Json(ChatResponse {
        text: outcome.reply.text,
        emotion: outcome.reply.emotion,
        scene: outcome.reply.scene,
        image: outcome.image,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/chat", post(chat))
}
