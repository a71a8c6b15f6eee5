//! Train Routes - Persona priming

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{TrainRequest, TrainResponse};
use crate::AppState;

pub const TRAINED_MESSAGE: &str = "تم تدريب الشخصية";

/// Prime the model with a persona and reset the character's memory
#[utoipa::path(
    post,
    path = "/api/train",
    request_body = TrainRequest,
    responses(
        (status = 200, description = "Character trained", body = TrainResponse),
        (status = 500, description = "Model call failed", body = crate::models::ErrorResponse)
    ),
    tag = "Train"
)]
pub async fn train(
    State(state): State<AppState>,
    payload: Result<Json<TrainRequest>, JsonRejection>,
) -> Result<Json<TrainResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::Train(e.body_text()))?;

    state
        .persona_service
        .train(&payload.character, payload.api_key.as_deref())
        .await
        .map_err(|e| ApiError::Train(e.to_string()))?;

    Ok(Json(TrainResponse {
        success: true,
        message: TRAINED_MESSAGE.to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/train", post(train))
}

#[cfg(test)]
mod tests {
    use super::TRAINED_MESSAGE;
    use crate::error::TRAIN_ERROR;
    use crate::test_support::{post_json, test_app, ScriptedModel};
    use axum::http::StatusCode;
    use hakawati::{CharacterMemory, ChatTurn};
    use serde_json::json;
    use std::sync::Arc;

    fn omar() -> serde_json::Value {
        json!({
            "character": {
                "name": "Omar",
                "personality": "حكيم وصبور",
                "story": "تاجر قديم في دمشق"
            }
        })
    }

    #[tokio::test]
    async fn test_train_overwrites_memory() {
        let model = Arc::new(ScriptedModel::replying("نعم، أنا عمر التاجر الحكيم."));
        let (app, memory) = test_app(model.clone(), None);

        memory.get_or_create("Omar", "قديم", "قديم").await.unwrap();
        memory
            .append_turn("Omar", ChatTurn::new("سلام", "وعليكم السلام"))
            .await
            .unwrap();

        let (status, body) = post_json(&app, "/api/train", omar()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], TRAINED_MESSAGE);

        let entry = memory.find("Omar").await.unwrap().unwrap();
        assert_eq!(entry.personality, "حكيم وصبور");
        assert_eq!(entry.story, "تاجر قديم في دمشق");
        assert_eq!(entry.training.as_deref(), Some("نعم، أنا عمر التاجر الحكيم."));
        assert!(entry.conversations().is_empty());

        assert!(model.prompts()[0].contains("لا تكشف أنك ذكاء اصطناعي"));
    }

    #[tokio::test]
    async fn test_train_failure_keeps_previous_memory() {
        let (app, memory) = test_app(Arc::new(ScriptedModel::failing()), None);
        memory.get_or_create("Omar", "قديم", "قديم").await.unwrap();

        let (status, body) = post_json(&app, "/api/train", omar()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], TRAIN_ERROR);
        let entry = memory.find("Omar").await.unwrap().unwrap();
        assert_eq!(entry.personality, "قديم");
    }
}
