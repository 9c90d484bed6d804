use crate::{Card, CardId, Column};

/// The intents a view may send to the card store.
///
/// Rejected intents (empty title, too many tags, unknown id, unknown
/// column) are silent no-ops: they return `None`/`false` and change nothing.
pub trait CardOperations {
    /// Create a card in the first column. `due_date` is the raw date-input
    /// value; empty or malformed means no due date.
    fn add_card(
        &mut self,
        title: &str,
        description: &str,
        tags: Vec<String>,
        due_date: &str,
    ) -> Option<Card>;

    fn update_card(
        &mut self,
        id: &CardId,
        title: &str,
        description: &str,
        tags: Vec<String>,
        due_date: &str,
    ) -> bool;

    fn delete_card(&mut self, id: &CardId) -> bool;

    /// `target_column` is the drop target's column name, e.g. `"blocked"`.
    fn move_card(&mut self, id: &CardId, target_column: &str) -> bool;

    /// Drop a card into `target_column` right before `before`, or at the end.
    fn reorder_card(&mut self, id: &CardId, target_column: &str, before: Option<&CardId>)
        -> bool;

    fn get_all(&self) -> &[Card];

    fn get_card(&self, id: &CardId) -> Option<&Card> {
        self.get_all().iter().find(|c| &c.id == id)
    }

    fn cards_in(&self, column: Column) -> Vec<&Card> {
        self.get_all().iter().filter(|c| c.column == column).collect()
    }
}
