//! Chat DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use hakawati::{Character, Emotion, HistoryMessage};

/// Chat request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub character: Character,
    pub message: String,
    /// Prior messages; only the last three reach the prompt
    #[serde(default)]
    pub history: Vec<HistoryMessage>,
    /// Overrides the server's model key for this request
    #[serde(default, rename = "apiKey")]
    pub api_key: Option<String>,
}

/// Chat response
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub text: String,
    pub emotion: Emotion,
    pub scene: String,
    pub image: Option<String>,
}

/// Chat failure body
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatErrorResponse {
    pub error: String,
    /// In-character apology shown in place of a reply
    pub text: String,
}
