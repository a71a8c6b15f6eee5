//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use hakawati::{Character, ChatTurn, Emotion, GeneratedCharacter, HistoryMessage, MemoryEntry};

use crate::models::{
    ChatErrorResponse, ChatRequest, ChatResponse, ErrorResponse, GenerateRequest,
    GenerateResponse, StatusResponse, TrainRequest, TrainResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::status::root,
        super::chat::chat,
        super::train::train,
        super::generate::generate,
        super::memory::get_memory,
    ),
    components(schemas(
        // Domain
        Character,
        HistoryMessage,
        Emotion,
        GeneratedCharacter,
        MemoryEntry,
        ChatTurn,
        // Requests / responses
        ChatRequest,
        ChatResponse,
        ChatErrorResponse,
        TrainRequest,
        TrainResponse,
        GenerateRequest,
        GenerateResponse,
        ErrorResponse,
        StatusResponse,
    )),
    tags(
        (name = "Status", description = "Service status"),
        (name = "Chat", description = "In-character conversation"),
        (name = "Train", description = "Persona priming"),
        (name = "Generate", description = "Character creation"),
        (name = "Memory", description = "Character memory")
    ),
    info(
        title = "Hakawati API",
        description = "Relay between persona chat clients and a generative language model"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_api_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/api/chat", "/api/train", "/api/generate", "/api/memory/{name}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
