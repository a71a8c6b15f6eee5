//! Hakawati Domain Library
//!
//! Core domain types and interfaces for the Hakawati character relay.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Character, MemoryEntry, ChatTurn, ChatReply, GeneratedCharacter
//!   - `value_objects/`: Immutable value types (Emotion, CharacterKind)
//!   - `services/`: Prompt construction, model reply parsing, image URLs
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Character memory store
//!   - `services/`: Language model gateway, image resolver
//!
//! # Usage
//!
//! ```rust,ignore
//! use hakawati::domain::{Character, MemoryEntry};
//! use hakawati::ports::{CharacterMemory, LanguageModel};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Character, CharacterDraft, CharacterKind, CharacterSheet, ChatReply, ChatReplyDraft, ChatTurn,
    DomainError, Emotion, GeneratedCharacter, HistoryMessage, MemoryEntry, ModelReply, MAX_TURNS,
};
pub use ports::{CharacterMemory, ImageResolver, LanguageModel};
