//! Character - Persona definition supplied by the client

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Character - identified by name, which is also the memory key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub personality: String,
    #[serde(default)]
    pub story: String,
    /// Current location description
    #[serde(default)]
    pub scene: String,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        personality: impl Into<String>,
        story: impl Into<String>,
        scene: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            personality: personality.into(),
            story: story.into(),
            scene: scene.into(),
        }
    }
}

/// One prior message of the conversation, as the client tracks it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryMessage {
    /// `user` for the human side; anything else is the character speaking
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

impl HistoryMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn character(content: impl Into<String>) -> Self {
        Self {
            role: "character".to_string(),
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == "user"
    }
}
