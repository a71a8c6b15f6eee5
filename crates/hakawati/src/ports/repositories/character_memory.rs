//! Character Memory Port
//!
//! Abstract interface for per-character conversation memory.
//! Keyed by character name.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, ChatTurn, MemoryEntry};

/// Repository interface for character memory
#[async_trait]
pub trait CharacterMemory: Send + Sync {
    /// Return the entry for `name`, creating an empty one seeded with
    /// `personality` and `story` if none exists
    async fn get_or_create(
        &self,
        name: &str,
        personality: &str,
        story: &str,
    ) -> Result<MemoryEntry, DomainError>;

    /// Replace the entry for `name` unconditionally
    async fn set(&self, name: &str, entry: MemoryEntry) -> Result<(), DomainError>;

    /// Append a turn to an existing entry, keeping at most
    /// [`MAX_TURNS`](crate::domain::MAX_TURNS) turns
    async fn append_turn(&self, name: &str, turn: ChatTurn) -> Result<(), DomainError>;

    /// Append a turn, first creating the entry seeded with `personality`
    /// and `story` if none exists. Both steps happen as one operation, so
    /// the entry cannot disappear between them.
    async fn record_turn(
        &self,
        name: &str,
        personality: &str,
        story: &str,
        turn: ChatTurn,
    ) -> Result<(), DomainError>;

    /// Find the entry for `name`
    async fn find(&self, name: &str) -> Result<Option<MemoryEntry>, DomainError>;

    /// Number of characters currently remembered
    async fn count(&self) -> Result<usize, DomainError>;
}
