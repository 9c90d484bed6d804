use chrono::NaiveDate;
use taskboard_domain::commands::{
    Command, CommandContext, CreateCard, DeleteCard, MoveCard, ReorderCard, UpdateCard,
};
use taskboard_domain::{parse_due_date, BoardView, Card, CardId, CardOperations, Column};
use taskboard_persistence::{SlotStore, StorageAdapter};

/// Empty input means no due date. Malformed input is dropped too.
fn resolve_due_date(input: &str) -> Option<NaiveDate> {
    let parsed = parse_due_date(input);
    if parsed.is_none() && !input.trim().is_empty() {
        tracing::debug!("Ignoring malformed due date '{}'", input);
    }
    parsed
}

/// The single owner of the card collection.
///
/// Every intent runs to completion before returning: validate, mutate,
/// persist the whole collection, then hand the new collection to the view.
/// Rejected intents touch neither storage nor view.
pub struct CardStore<S: SlotStore, V: BoardView> {
    cards: Vec<Card>,
    storage: StorageAdapter<S>,
    view: V,
    persisted: bool,
}

impl<S: SlotStore, V: BoardView> CardStore<S, V> {
    /// Load the collection (seed data if nothing usable is stored) and paint
    /// the view once.
    pub fn new(storage: StorageAdapter<S>, mut view: V) -> Self {
        let cards = storage.load();
        view.render(&cards);
        Self {
            cards,
            storage,
            view,
            persisted: true,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the last mutation reached storage.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn storage(&self) -> &StorageAdapter<S> {
        &self.storage
    }

    fn apply(&mut self, command: &dyn Command) -> bool {
        let mut ctx = CommandContext {
            cards: &mut self.cards,
        };
        if let Err(e) = command.execute(&mut ctx) {
            if e.is_rejection() {
                tracing::debug!("Rejected '{}': {}", command.description(), e);
            } else {
                tracing::warn!("Failed '{}': {}", command.description(), e);
            }
            return false;
        }
        tracing::debug!("Applied '{}'", command.description());
        self.commit();
        true
    }

    fn commit(&mut self) {
        self.persisted = self.storage.save(&self.cards);
        self.view.render(&self.cards);
    }

    fn parse_column(target_column: &str) -> Option<Column> {
        match target_column.parse::<Column>() {
            Ok(column) => Some(column),
            Err(e) => {
                tracing::debug!("Rejected drop target: {}", e);
                None
            }
        }
    }
}

impl<S: SlotStore, V: BoardView> CardOperations for CardStore<S, V> {
    fn add_card(
        &mut self,
        title: &str,
        description: &str,
        tags: Vec<String>,
        due_date: &str,
    ) -> Option<Card> {
        let cmd = CreateCard {
            title: title.to_string(),
            description: description.to_string(),
            tags,
            due_date: resolve_due_date(due_date),
        };
        if self.apply(&cmd) {
            self.cards.last().cloned()
        } else {
            None
        }
    }

    fn update_card(
        &mut self,
        id: &CardId,
        title: &str,
        description: &str,
        tags: Vec<String>,
        due_date: &str,
    ) -> bool {
        let cmd = UpdateCard {
            card_id: id.clone(),
            title: title.to_string(),
            description: description.to_string(),
            tags,
            due_date: resolve_due_date(due_date),
        };
        self.apply(&cmd)
    }

    fn delete_card(&mut self, id: &CardId) -> bool {
        self.apply(&DeleteCard {
            card_id: id.clone(),
        })
    }

    fn move_card(&mut self, id: &CardId, target_column: &str) -> bool {
        let Some(column) = Self::parse_column(target_column) else {
            return false;
        };
        self.apply(&MoveCard {
            card_id: id.clone(),
            column,
        })
    }

    fn reorder_card(
        &mut self,
        id: &CardId,
        target_column: &str,
        before: Option<&CardId>,
    ) -> bool {
        let Some(column) = Self::parse_column(target_column) else {
            return false;
        };
        self.apply(&ReorderCard {
            card_id: id.clone(),
            column,
            before: before.cloned(),
        })
    }

    fn get_all(&self) -> &[Card] {
        &self.cards
    }
}
