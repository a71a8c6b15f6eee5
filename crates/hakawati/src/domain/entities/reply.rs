//! Reply shapes - what the model is asked to produce and what clients get back

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::value_objects::Emotion;

/// Chat reply fields as written by the model.
///
/// Every field is optional; gaps are filled when the draft is
/// completed into a [`ChatReply`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatReplyDraft {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub scene: Option<String>,
    #[serde(default, rename = "imagePrompt")]
    pub image_prompt: Option<String>,
}

/// Completed chat reply
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub text: String,
    pub emotion: Emotion,
    pub scene: String,
    /// English description used to resolve an image
    pub image_prompt: String,
}

/// Generated character fields as written by the model
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CharacterDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub personality: Option<String>,
    #[serde(default)]
    pub scene: Option<String>,
    #[serde(default, rename = "imagePrompt")]
    pub image_prompt: Option<String>,
}

/// Completed character description, before an avatar is attached
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSheet {
    pub name: String,
    pub story: String,
    pub personality: String,
    pub scene: String,
    pub image_prompt: String,
}

impl CharacterSheet {
    pub fn with_image(self, image: impl Into<String>) -> GeneratedCharacter {
        GeneratedCharacter {
            name: self.name,
            story: self.story,
            personality: self.personality,
            scene: self.scene,
            image_prompt: self.image_prompt,
            image: image.into(),
        }
    }
}

/// Character returned by the generate endpoint; never stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCharacter {
    pub name: String,
    pub story: String,
    pub personality: String,
    pub scene: String,
    pub image_prompt: String,
    /// Avatar URL derived from the name
    pub image: String,
}
