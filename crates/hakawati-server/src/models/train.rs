//! Train DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use hakawati::Character;

/// Train request
#[derive(Debug, Deserialize, ToSchema)]
pub struct TrainRequest {
    pub character: Character,
    #[serde(default, rename = "apiKey")]
    pub api_key: Option<String>,
}

/// Train response
#[derive(Debug, Serialize, ToSchema)]
pub struct TrainResponse {
    pub success: bool,
    pub message: String,
}

/// Generic failure body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
