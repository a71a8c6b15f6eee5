//! Generate Routes - Character creation and story elaboration

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::application::GenerateCommand;
use crate::error::ApiError;
use crate::models::{GenerateRequest, GenerateResponse};
use crate::AppState;

/// Invent a character, or elaborate a story when `base_story` is given
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated character", body = GenerateResponse),
        (status = 500, description = "Model call failed", body = crate::models::ErrorResponse)
    ),
    tag = "Generate"
)]
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::Generate(e.body_text()))?;

    tracing::debug!("Generate action: {:?}", payload.action);

    let command = GenerateCommand {
        name: payload.name,
        kind: payload.kind,
        base_story: payload.base_story,
    };

    let character = state
        .persona_service
        .generate(&command, payload.api_key.as_deref())
        .await
        .map_err(|e| ApiError::Generate(e.to_string()))?;

    Ok(Json(GenerateResponse { character }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate", post(generate))
}
