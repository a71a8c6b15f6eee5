//! In-memory character memory
//!
//! Lives for the process lifetime; a restart forgets everything.
//!
//! Each operation holds the lock for its whole duration. Chat uses
//! `record_turn`, so creating the entry and appending to it cannot be
//! split by an eviction. A `set` for the same name still wins or loses
//! against a chat as a whole.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use hakawati::{CharacterMemory, ChatTurn, DomainError, MemoryEntry};

struct Slot {
    entry: MemoryEntry,
    /// Logical time of the last write, for eviction
    touched: u64,
}

#[derive(Default)]
struct Inner {
    slots: HashMap<String, Slot>,
    clock: u64,
}

impl Inner {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Drop least recently written characters until `capacity` holds,
    /// never dropping `keep`
    fn evict(&mut self, capacity: Option<usize>, keep: &str) {
        let Some(capacity) = capacity else {
            return;
        };

        while self.slots.len() > capacity {
            let oldest = self
                .slots
                .iter()
                .filter(|(name, _)| name.as_str() != keep)
                .min_by_key(|(_, slot)| slot.touched)
                .map(|(name, _)| name.clone());

            match oldest {
                Some(name) => {
                    self.slots.remove(&name);
                    tracing::info!("Evicted character memory: {}", name);
                }
                None => break,
            }
        }
    }
}

/// [`CharacterMemory`] backed by a process-local map
#[derive(Default)]
pub struct InMemoryCharacterMemory {
    inner: RwLock<Inner>,
    /// Maximum number of characters; `None` is unbounded
    capacity: Option<usize>,
}

impl InMemoryCharacterMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            inner: RwLock::default(),
            capacity,
        }
    }
}

#[async_trait]
impl CharacterMemory for InMemoryCharacterMemory {
    async fn get_or_create(
        &self,
        name: &str,
        personality: &str,
        story: &str,
    ) -> Result<MemoryEntry, DomainError> {
        let mut inner = self.inner.write().await;
        if let Some(slot) = inner.slots.get(name) {
            return Ok(slot.entry.clone());
        }

        let entry = MemoryEntry::new(personality, story);
        let touched = inner.tick();
        inner.slots.insert(
            name.to_string(),
            Slot {
                entry: entry.clone(),
                touched,
            },
        );
        inner.evict(self.capacity, name);

        tracing::debug!("Created character memory: {}", name);
        Ok(entry)
    }

    async fn set(&self, name: &str, entry: MemoryEntry) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        let touched = inner.tick();
        inner
            .slots
            .insert(name.to_string(), Slot { entry, touched });
        inner.evict(self.capacity, name);
        Ok(())
    }

    async fn append_turn(&self, name: &str, turn: ChatTurn) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        let touched = inner.tick();
        let slot = inner
            .slots
            .get_mut(name)
            .ok_or_else(|| DomainError::not_found("Character", name))?;

        slot.entry.push_turn(turn);
        slot.touched = touched;
        Ok(())
    }

    async fn record_turn(
        &self,
        name: &str,
        personality: &str,
        story: &str,
        turn: ChatTurn,
    ) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        let touched = inner.tick();
        let slot = inner.slots.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!("Created character memory: {}", name);
            Slot {
                entry: MemoryEntry::new(personality, story),
                touched,
            }
        });

        slot.entry.push_turn(turn);
        slot.touched = touched;
        inner.evict(self.capacity, name);
        Ok(())
    }

    async fn find(&self, name: &str) -> Result<Option<MemoryEntry>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.slots.get(name).map(|slot| slot.entry.clone()))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.inner.read().await.slots.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hakawati::MAX_TURNS;

    #[tokio::test]
    async fn test_get_or_create_seeds_once() {
        let store = InMemoryCharacterMemory::new();

        let created = store.get_or_create("Layla", "حالمة", "شاعرة").await.unwrap();
        assert_eq!(created.personality, "حالمة");
        assert!(created.conversations().is_empty());

        // Second call keeps the original seed
        let existing = store.get_or_create("Layla", "other", "other").await.unwrap();
        assert_eq!(existing.personality, "حالمة");
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_append_keeps_most_recent_turns() {
        let store = InMemoryCharacterMemory::new();
        store.get_or_create("Layla", "p", "s").await.unwrap();

        for n in 1..=(MAX_TURNS + 5) {
            store
                .append_turn("Layla", ChatTurn::new(format!("m{n}"), format!("r{n}")))
                .await
                .unwrap();

            let entry = store.find("Layla").await.unwrap().unwrap();
            assert_eq!(entry.conversations().len(), n.min(MAX_TURNS));
            assert_eq!(entry.last_turn().unwrap().user, format!("m{n}"));
        }
    }

    #[tokio::test]
    async fn test_append_to_unknown_character_fails() {
        let store = InMemoryCharacterMemory::new();
        let err = store
            .append_turn("nobody", ChatTurn::new("a", "b"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_set_overwrites_entry() {
        let store = InMemoryCharacterMemory::new();
        store.get_or_create("Omar", "p", "s").await.unwrap();
        store.append_turn("Omar", ChatTurn::new("a", "b")).await.unwrap();

        store
            .set("Omar", MemoryEntry::trained("p2", "s2", "نعم"))
            .await
            .unwrap();

        let entry = store.find("Omar").await.unwrap().unwrap();
        assert_eq!(entry.personality, "p2");
        assert_eq!(entry.training.as_deref(), Some("نعم"));
        assert!(entry.conversations().is_empty());
    }

    #[tokio::test]
    async fn test_capacity_evicts_least_recently_written() {
        let store = InMemoryCharacterMemory::with_capacity(Some(2));
        store.get_or_create("a", "p", "s").await.unwrap();
        store.get_or_create("b", "p", "s").await.unwrap();
        store.append_turn("a", ChatTurn::new("x", "y")).await.unwrap();

        store.get_or_create("c", "p", "s").await.unwrap();

        assert_eq!(store.count().await.unwrap(), 2);
        assert!(store.find("a").await.unwrap().is_some());
        assert!(store.find("b").await.unwrap().is_none());
        assert!(store.find("c").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_record_turn_seeds_then_appends() {
        let store = InMemoryCharacterMemory::new();
        store
            .record_turn("Layla", "حالمة", "شاعرة", ChatTurn::new("a", "b"))
            .await
            .unwrap();
        store
            .record_turn("Layla", "other", "other", ChatTurn::new("c", "d"))
            .await
            .unwrap();

        let entry = store.find("Layla").await.unwrap().unwrap();
        assert_eq!(entry.personality, "حالمة");
        assert_eq!(entry.conversations().len(), 2);
        assert_eq!(entry.last_turn().unwrap().user, "c");
    }

    #[tokio::test]
    async fn test_record_turn_survives_eviction_of_its_entry() {
        let store = InMemoryCharacterMemory::with_capacity(Some(1));
        store.get_or_create("A", "p", "s").await.unwrap();
        store.get_or_create("B", "p", "s").await.unwrap();
        assert!(store.find("A").await.unwrap().is_none());

        store
            .record_turn("A", "p", "s", ChatTurn::new("x", "y"))
            .await
            .unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        let entry = store.find("A").await.unwrap().unwrap();
        assert_eq!(entry.conversations().len(), 1);
    }

    #[tokio::test]
    async fn test_unbounded_by_default() {
        let store = InMemoryCharacterMemory::new();
        for i in 0..200 {
            store.get_or_create(&format!("c{i}"), "p", "s").await.unwrap();
        }
        assert_eq!(store.count().await.unwrap(), 200);
    }
}
