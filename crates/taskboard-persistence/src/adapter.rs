//! Storage adapter for the card collection.
//!
//! Reads and writes the whole collection to one named slot. Reading never
//! fails: anything short of a valid, non-empty collection becomes the seed
//! dataset. Writing never fails either; errors are logged and reported as
//! `false` so the in-memory collection stays authoritative.

use std::collections::HashSet;

use crate::serialization::JsonSerializer;
use crate::traits::{Serializer, SlotStore};
use taskboard_core::{BoardError, BoardResult};
use taskboard_domain::{seed_cards, Card};

pub struct StorageAdapter<S: SlotStore, F: Serializer = JsonSerializer> {
    store: S,
    slot: String,
    serializer: F,
}

impl<S: SlotStore> StorageAdapter<S, JsonSerializer> {
    pub fn new(store: S, slot: impl Into<String>) -> Self {
        Self::with_serializer(store, slot, JsonSerializer)
    }
}

impl<S: SlotStore, F: Serializer> StorageAdapter<S, F> {
    pub fn with_serializer(store: S, slot: impl Into<String>, serializer: F) -> Self {
        Self {
            store,
            slot: slot.into(),
            serializer,
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the persisted collection, or the seed dataset if there is none.
    pub fn load(&self) -> Vec<Card> {
        match self.try_load() {
            Ok(Some(cards)) => {
                tracing::info!(
                    "Loaded {} cards from {}",
                    cards.len(),
                    self.store.describe(&self.slot)
                );
                cards
            }
            Ok(None) => {
                tracing::info!(
                    "No saved board at {}, starting from seed data",
                    self.store.describe(&self.slot)
                );
                seed_cards()
            }
            Err(e) => {
                tracing::warn!(
                    "Discarding unreadable board at {}: {}. Starting from seed data",
                    self.store.describe(&self.slot),
                    e
                );
                seed_cards()
            }
        }
    }

    /// Load without the seed fallback. `Ok(None)` means the slot is absent.
    pub fn try_load(&self) -> BoardResult<Option<Vec<Card>>> {
        let Some(bytes) = self.store.read(&self.slot)? else {
            return Ok(None);
        };
        let cards: Vec<Card> = self.serializer.deserialize(&bytes)?;
        validate_collection(&cards)?;
        Ok(Some(cards))
    }

    /// Persist the full collection, replacing whatever the slot held.
    /// Returns whether the write succeeded.
    pub fn save(&self, cards: &[Card]) -> bool {
        match self.try_save(cards) {
            Ok(()) => {
                tracing::debug!(
                    "Persisted {} cards to {}",
                    cards.len(),
                    self.store.describe(&self.slot)
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    "Failed to persist {} cards to {}: {}",
                    cards.len(),
                    self.store.describe(&self.slot),
                    e
                );
                false
            }
        }
    }

    pub fn try_save(&self, cards: &[Card]) -> BoardResult<()> {
        let bytes = self.serializer.serialize(cards)?;
        self.store.write(&self.slot, &bytes)
    }
}

/// A stored collection is usable only if it is non-empty and every card
/// satisfies the card invariants.
fn validate_collection(cards: &[Card]) -> BoardResult<()> {
    if cards.is_empty() {
        return Err(BoardError::Serialization(
            "stored collection is empty".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for card in cards {
        card.validate()?;
        if !seen.insert(&card.id) {
            return Err(BoardError::Validation(format!(
                "duplicate card id {}",
                card.id
            )));
        }
    }
    Ok(())
}
