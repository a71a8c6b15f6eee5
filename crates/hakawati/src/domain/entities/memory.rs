//! Memory - Per-character conversation state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum number of turns kept per character
pub const MAX_TURNS: usize = 50;

/// ChatTurn - one user/reply exchange, immutable once stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatTurn {
    /// What the user said
    pub user: String,
    /// What the character replied
    pub ai: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    pub fn new(user: impl Into<String>, ai: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ai: ai.into(),
            timestamp: Utc::now(),
        }
    }
}

/// MemoryEntry - what the relay remembers about one character
///
/// The turn list is a sliding window: it never holds more than
/// [`MAX_TURNS`] turns, the oldest are dropped first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemoryEntry {
    pub personality: String,
    pub story: String,
    /// Model acknowledgment captured by the train endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training: Option<String>,
    #[serde(default)]
    conversations: Vec<ChatTurn>,
}

impl MemoryEntry {
    /// Fresh entry with no turns
    pub fn new(personality: impl Into<String>, story: impl Into<String>) -> Self {
        Self {
            personality: personality.into(),
            story: story.into(),
            training: None,
            conversations: Vec::new(),
        }
    }

    /// Entry produced by training: carries the acknowledgment, no turns
    pub fn trained(
        personality: impl Into<String>,
        story: impl Into<String>,
        training: impl Into<String>,
    ) -> Self {
        Self {
            training: Some(training.into()),
            ..Self::new(personality, story)
        }
    }

    pub fn conversations(&self) -> &[ChatTurn] {
        &self.conversations
    }

    pub fn last_turn(&self) -> Option<&ChatTurn> {
        self.conversations.last()
    }

    /// Append a turn, trimming to the most recent [`MAX_TURNS`]
    pub fn push_turn(&mut self, turn: ChatTurn) {
        self.conversations.push(turn);
        if self.conversations.len() > MAX_TURNS {
            let excess = self.conversations.len() - MAX_TURNS;
            self.conversations.drain(..excess);
        }
    }
}
