//! Optional API Key Authentication (Bearer Token)
//!
//! Only active when an access token is configured.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::AppState;

/// Authentication middleware
/// Validates Bearer token against the configured access token
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(expected) = state.access_token.as_deref() else {
        return Ok(next.run(request).await);
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) if token == expected => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("Invalid API key attempted");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::warn!("Missing or malformed Authorization header");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{get, post_json, send, test_app, ScriptedModel};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_open_when_no_token_configured() {
        let (app, _) = test_app(Arc::new(ScriptedModel::replying("ok")), None);
        let (status, _) =
            post_json(&app, "/api/generate", serde_json::json!({ "type": "anime" })).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejects_missing_token() {
        let (app, _) = test_app(Arc::new(ScriptedModel::replying("ok")), Some("secret"));
        let (status, _) = get(&app, "/api/memory/Layla").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_rejects_wrong_token() {
        let (app, _) = test_app(Arc::new(ScriptedModel::replying("ok")), Some("secret"));
        let request = Request::get("/api/memory/Layla")
            .header(header::AUTHORIZATION, "Bearer nope")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_accepts_valid_token() {
        let (app, _) = test_app(Arc::new(ScriptedModel::replying("ok")), Some("secret"));
        let request = Request::get("/api/memory/Layla")
            .header(header::AUTHORIZATION, "Bearer secret")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_stays_public() {
        let (app, _) = test_app(Arc::new(ScriptedModel::replying("ok")), Some("secret"));
        let (status, _) = get(&app, "/").await;
        assert_eq!(status, StatusCode::OK);
    }
}
