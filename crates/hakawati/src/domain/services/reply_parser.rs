//! Model reply parsing
//!
//! The model is asked for JSON but is free to answer with anything:
//! fenced JSON, JSON wrapped in prose, or plain text. Parsing never fails;
//! text that does not decode becomes [`ModelReply::Raw`] and is completed
//! from defaults.

use serde::de::DeserializeOwned;

use crate::domain::entities::{Character, CharacterDraft, CharacterSheet, ChatReply, ChatReplyDraft};
use crate::domain::value_objects::Emotion;

/// Name given to a generated character when neither the client nor the model named it
pub const DEFAULT_CHARACTER_NAME: &str = "شخصية جديدة";
pub const DEFAULT_PERSONALITY: &str = "ذكي، مرح، طموح";
pub const DEFAULT_SCENE: &str = "مكان مناسب";

/// Outcome of decoding model text
#[derive(Debug, Clone, PartialEq)]
pub enum ModelReply<T> {
    /// The text decoded into the requested shape
    Structured(T),
    /// Undecodable text, kept verbatim
    Raw(String),
}

impl<T: DeserializeOwned> ModelReply<T> {
    /// Decode model output into `T`, falling back to [`ModelReply::Raw`].
    pub fn parse(raw: &str) -> Self {
        let cleaned = strip_code_fences(raw);

        if let Ok(value) = serde_json::from_str::<T>(&cleaned) {
            return ModelReply::Structured(value);
        }

        if let Some(span) = outermost_object(&cleaned) {
            if let Ok(value) = serde_json::from_str::<T>(span) {
                return ModelReply::Structured(value);
            }
        }

        tracing::debug!("Model reply is not structured, using raw text");
        ModelReply::Raw(raw.to_string())
    }
}

impl<T> ModelReply<T> {
    pub fn is_structured(&self) -> bool {
        matches!(self, ModelReply::Structured(_))
    }
}

impl ModelReply<ChatReplyDraft> {
    /// Complete a chat reply, using the character for missing scene and image.
    pub fn into_chat_reply(self, character: &Character) -> ChatReply {
        let (draft, raw) = match self {
            ModelReply::Structured(draft) => (draft, None),
            ModelReply::Raw(text) => (ChatReplyDraft::default(), Some(text)),
        };

        let text = match (draft.text, raw) {
            (Some(text), _) => text,
            (None, Some(raw)) => raw,
            (None, None) => String::new(),
        };
        let scene = non_empty(draft.scene).unwrap_or_else(|| character.scene.clone());
        let image_prompt = non_empty(draft.image_prompt)
            .unwrap_or_else(|| format!("{} in {}", character.name, character.scene));

        ChatReply {
            text,
            emotion: draft
                .emotion
                .as_deref()
                .map(Emotion::from_label)
                .unwrap_or_default(),
            scene,
            image_prompt,
        }
    }
}

impl ModelReply<CharacterDraft> {
    /// Complete a generated character. `requested_name` is what the client asked for.
    pub fn into_character_sheet(self, requested_name: Option<&str>) -> CharacterSheet {
        let requested_name = requested_name.filter(|n| !n.trim().is_empty());
        let (draft, raw) = match self {
            ModelReply::Structured(draft) => (draft, None),
            ModelReply::Raw(text) => (CharacterDraft::default(), Some(text)),
        };

        let image_prompt = non_empty(draft.image_prompt)
            .unwrap_or_else(|| format!("{} portrait", requested_name.unwrap_or("character")));
        let name = non_empty(draft.name)
            .or_else(|| requested_name.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_CHARACTER_NAME.to_string());

        CharacterSheet {
            name,
            story: draft.story.or(raw).unwrap_or_default(),
            personality: non_empty(draft.personality)
                .unwrap_or_else(|| DEFAULT_PERSONALITY.to_string()),
            scene: non_empty(draft.scene).unwrap_or_else(|| DEFAULT_SCENE.to_string()),
            image_prompt,
        }
    }
}

/// Remove markdown code-fence markers anywhere in the text and trim.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Slice from the first `{` to the last `}`, if both exist in that order.
fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
