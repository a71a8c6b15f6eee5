//! Status Routes

use axum::{routing::get, Json, Router};

use crate::models::{HealthCheck, StatusResponse};
use crate::AppState;

pub const ENDPOINTS: [&str; 3] = ["/api/chat", "/api/train", "/api/generate"];

/// Service banner with the public endpoints
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Server is running", body = StatusResponse)),
    tag = "Status"
)]
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "AI Character Server Running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Hakawati is running - the storyteller is listening".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
