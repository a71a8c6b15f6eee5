//! Generate DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use hakawati::GeneratedCharacter;

/// Generate request
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Client-side label for the action; not interpreted
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// `real`, `anime`, or anything else for fictional
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Story to elaborate; absent means invent a new character
    #[serde(default)]
    pub base_story: Option<String>,
    #[serde(default, rename = "apiKey")]
    pub api_key: Option<String>,
}

/// Generate response
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateResponse {
    pub character: GeneratedCharacter,
}
