use taskboard_core::BoardResult;

pub mod card_commands;

pub use card_commands::*;

/// Trait for domain commands that mutate the card collection.
/// A command validates everything it needs before touching state, so a
/// failed command leaves the collection exactly as it found it.
pub trait Command: Send + Sync {
    /// Execute this command, mutating the collection
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub cards: &'a mut Vec<crate::Card>,
}

impl CommandContext<'_> {
    pub(crate) fn position_of(&self, id: &crate::CardId) -> BoardResult<usize> {
        self.cards
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| taskboard_core::BoardError::NotFound(format!("card {}", id)))
    }
}
