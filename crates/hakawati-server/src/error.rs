//! HTTP error mapping
//!
//! Clients only ever see a fixed, localized message per endpoint. The
//! underlying cause is logged and never leaves the server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::{ChatErrorResponse, ErrorResponse};

pub const CHAT_ERROR: &str = "حدث خطأ في المعالجة";
pub const CHAT_FALLBACK_TEXT: &str = "عذراً، حدث خطأ. حاول مرة أخرى.";
pub const TRAIN_ERROR: &str = "خطأ في التدريب";
pub const GENERATE_ERROR: &str = "خطأ في التوليد";
pub const MEMORY_ERROR: &str = "خطأ في قراءة الذاكرة";
pub const NOT_FOUND_ERROR: &str = "الشخصية غير موجودة";

/// Endpoint failure, carrying the internal cause for the log
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("chat failed: {0}")]
    Chat(String),

    #[error("training failed: {0}")]
    Train(String),

    #[error("generation failed: {0}")]
    Generate(String),

    #[error("memory lookup failed: {0}")]
    Memory(String),

    #[error("character not found: {0}")]
    CharacterNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::CharacterNotFound(_) => tracing::debug!("{}", self),
            _ => tracing::error!("{}", self),
        }

        match self {
            ApiError::Chat(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatErrorResponse {
                    error: CHAT_ERROR.to_string(),
                    text: CHAT_FALLBACK_TEXT.to_string(),
                }),
            )
                .into_response(),
            ApiError::Train(_) => error_body(StatusCode::INTERNAL_SERVER_ERROR, TRAIN_ERROR),
            ApiError::Generate(_) => error_body(StatusCode::INTERNAL_SERVER_ERROR, GENERATE_ERROR),
            ApiError::Memory(_) => error_body(StatusCode::INTERNAL_SERVER_ERROR, MEMORY_ERROR),
            ApiError::CharacterNotFound(_) => error_body(StatusCode::NOT_FOUND, NOT_FOUND_ERROR),
        }
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
