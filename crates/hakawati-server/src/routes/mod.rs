//! Hakawati API Routes
//!
//! - / - Service status
//! - /health - Health check
//! - /api/chat - In-character reply
//! - /api/train - Persona priming (resets memory)
//! - /api/generate - Character creation / story elaboration
//! - /api/memory/:name - Stored memory for a character (only with an access token)
//! - /swagger-ui - API documentation

pub mod chat;
pub mod generate;
pub mod memory;
pub mod status;
pub mod swagger;
pub mod train;

use std::path::Path;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth;
use crate::AppState;

/// Build the full application router
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let mut api_routes = Router::new()
        .merge(chat::router())
        .merge(train::router())
        .merge(generate::router());
    // Stored conversations are only readable behind the bearer check
    if state.access_token.is_some() {
        api_routes = api_routes.merge(memory::router());
    }
    let api_routes = api_routes.route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::auth_middleware,
    ));

    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(status::router())
        .merge(api_routes)
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
