//! Persona Application Service (Use Case)
//!
//! Sequences prompt construction, the model call, reply parsing, image
//! resolution and memory updates for the chat, train and generate use cases.

use std::sync::Arc;

use hakawati::domain::image::{avatar_url, AVATAR_BASE};
use hakawati::domain::prompt;
use hakawati::{
    Character, CharacterDraft, CharacterKind, CharacterMemory, ChatReply, ChatReplyDraft,
    ChatTurn, DomainError, GeneratedCharacter, HistoryMessage, ImageResolver, LanguageModel,
    MemoryEntry, ModelReply,
};

/// Result of a chat exchange
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub reply: ChatReply,
    /// `None` when no image could be resolved
    pub image: Option<String>,
}

/// What the generate use case was asked for
#[derive(Debug, Clone, Default)]
pub struct GenerateCommand {
    pub name: Option<String>,
    /// Character type as sent by the client (`real`, `anime`, ...)
    pub kind: String,
    /// When present, the story is elaborated instead of inventing a character
    pub base_story: Option<String>,
}

/// Application service for persona operations
pub struct PersonaService {
    model: Arc<dyn LanguageModel>,
    memory: Arc<dyn CharacterMemory>,
    images: Arc<dyn ImageResolver>,
    avatar_base: String,
}

impl PersonaService {
    pub fn new(
        model: Arc<dyn LanguageModel>,
        memory: Arc<dyn CharacterMemory>,
        images: Arc<dyn ImageResolver>,
    ) -> Self {
        Self {
            model,
            memory,
            images,
            avatar_base: AVATAR_BASE.to_string(),
        }
    }

    /// Reply in character to `message`.
    ///
    /// Memory is only touched once the model has answered, so a failed call
    /// leaves no trace.
    pub async fn chat(
        &self,
        character: &Character,
        message: &str,
        history: &[HistoryMessage],
        api_key: Option<&str>,
    ) -> Result<ChatOutcome, DomainError> {
        validate_name(&character.name)?;

        let prompt = prompt::chat_prompt(character, history, message);
        let raw = self.model.generate(&prompt, api_key).await?;

        let parsed = ModelReply::<ChatReplyDraft>::parse(&raw);
        if !parsed.is_structured() {
            tracing::warn!("Unstructured chat reply for {}, using raw text", character.name);
        }
        let reply = parsed.into_chat_reply(character);
        let image = self.images.resolve(&reply.image_prompt).await;

        self.memory
            .record_turn(
                &character.name,
                &character.personality,
                &character.story,
                ChatTurn::new(message, reply.text.clone()),
            )
            .await?;

        tracing::info!(
            "Chat with {} via {}/{} - emotion: {}",
            character.name,
            self.model.provider_name(),
            self.model.model_id(),
            reply.emotion
        );

        Ok(ChatOutcome { reply, image })
    }

    /// Prime the model with the persona and reset the character's memory.
    pub async fn train(
        &self,
        character: &Character,
        api_key: Option<&str>,
    ) -> Result<MemoryEntry, DomainError> {
        validate_name(&character.name)?;

        let prompt = prompt::training_prompt(character);
        let acknowledgment = self.model.generate(&prompt, api_key).await?;

        let entry = MemoryEntry::trained(&character.personality, &character.story, acknowledgment);
        self.memory.set(&character.name, entry.clone()).await?;

        tracing::info!("Trained character: {}", character.name);
        Ok(entry)
    }

    /// Elaborate a story or invent a new character.
    pub async fn generate(
        &self,
        command: &GenerateCommand,
        api_key: Option<&str>,
    ) -> Result<GeneratedCharacter, DomainError> {
        let name = command.name.as_deref().filter(|n| !n.trim().is_empty());
        let base_story = command
            .base_story
            .as_deref()
            .filter(|s| !s.trim().is_empty());

        let prompt = match base_story {
            Some(story) => prompt::elaboration_prompt(name, &command.kind, story),
            None => prompt::creation_prompt(CharacterKind::from_label(&command.kind)),
        };
        let raw = self.model.generate(&prompt, api_key).await?;

        let sheet = ModelReply::<CharacterDraft>::parse(&raw).into_character_sheet(name);
        let image = avatar_url(&self.avatar_base, &sheet.name);

        tracing::info!(
            "Generated character {} ({})",
            sheet.name,
            if base_story.is_some() { "elaborate" } else { "create" }
        );
        Ok(sheet.with_image(image))
    }

    /// Stored memory for a character, if any
    pub async fn memory_of(&self, name: &str) -> Result<Option<MemoryEntry>, DomainError> {
        self.memory.find(name).await
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation(
            "character name must not be empty".to_string(),
        ));
    }
    Ok(())
}
