use super::{Command, CommandContext};
use crate::{Card, CardId, Column};
use chrono::NaiveDate;
use taskboard_core::{BoardError, BoardResult};

const MAX_ID_ATTEMPTS: usize = 8;

fn fresh_id(cards: &[Card]) -> BoardResult<CardId> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = CardId::generate();
        if !cards.iter().any(|c| c.id == id) {
            return Ok(id);
        }
        tracing::warn!("Generated card id {} already in use, retrying", id);
    }
    Err(BoardError::Internal(
        "could not generate a unique card id".to_string(),
    ))
}

/// Create a new card at the end of the collection, in the first column
pub struct CreateCard {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub due_date: Option<NaiveDate>,
}

impl Command for CreateCard {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        Card::validate_fields(&self.title, &self.tags)?;
        let id = fresh_id(context.cards.as_slice())?;
        context.cards.push(Card::new(
            id,
            self.title.trim().to_string(),
            self.description.clone(),
            self.tags.clone(),
            self.due_date,
        ));
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create card: '{}'", self.title)
    }
}

/// Replace the editable content of a card; its column is left alone
pub struct UpdateCard {
    pub card_id: CardId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub due_date: Option<NaiveDate>,
}

impl Command for UpdateCard {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        Card::validate_fields(&self.title, &self.tags)?;
        let pos = context.position_of(&self.card_id)?;
        context.cards[pos].update_content(
            self.title.trim().to_string(),
            self.description.clone(),
            self.tags.clone(),
            self.due_date,
        );
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update card {}", self.card_id)
    }
}

/// Remove a card from the collection
pub struct DeleteCard {
    pub card_id: CardId,
}

impl Command for DeleteCard {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let pos = context.position_of(&self.card_id)?;
        context.cards.remove(pos);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete card {}", self.card_id)
    }
}

/// Move card to a different column, keeping its place in the collection
pub struct MoveCard {
    pub card_id: CardId,
    pub column: Column,
}

impl Command for MoveCard {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let pos = context.position_of(&self.card_id)?;
        context.cards[pos].move_to_column(self.column);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Move card {} to column {}", self.card_id, self.column)
    }
}

/// Drop a card into a column, placing it right before another card of that
/// column or at the end of the collection
pub struct ReorderCard {
    pub card_id: CardId,
    pub column: Column,
    pub before: Option<CardId>,
}

impl Command for ReorderCard {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let pos = context.position_of(&self.card_id)?;
        if let Some(before) = &self.before {
            if before == &self.card_id {
                return Err(BoardError::Validation(format!(
                    "card {} cannot be placed before itself",
                    before
                )));
            }
            let anchor = &context.cards[context.position_of(before)?];
            if anchor.column != self.column {
                return Err(BoardError::Validation(format!(
                    "card {} is in {}, not {}",
                    before, anchor.column, self.column
                )));
            }
        }

        let mut card = context.cards.remove(pos);
        card.move_to_column(self.column);
        let target = self
            .before
            .as_ref()
            .and_then(|before| context.cards.iter().position(|c| &c.id == before))
            .unwrap_or(context.cards.len());
        context.cards.insert(target, card);
        Ok(())
    }

    fn description(&self) -> String {
        match &self.before {
            Some(before) => format!(
                "Reorder card {} into {} before {}",
                self.card_id, self.column, before
            ),
            None => format!("Reorder card {} to end of {}", self.card_id, self.column),
        }
    }
}
