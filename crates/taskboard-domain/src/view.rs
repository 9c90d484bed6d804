//! The contract between the card store and whatever draws the board.

use crate::{Card, Column};

/// Receives the full, current card collection after every change.
///
/// Implementations own all presentation; they never see the collection
/// except through this call and send user intents back through
/// [`crate::CardOperations`].
pub trait BoardView {
    fn render(&mut self, cards: &[Card]);
}

/// A view that draws nothing. Useful for headless stores.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl BoardView for NullView {
    fn render(&mut self, _cards: &[Card]) {}
}

/// Adapts a closure into a view.
pub struct FnView<F>(pub F);

impl<F> BoardView for FnView<F>
where
    F: FnMut(&[Card]),
{
    fn render(&mut self, cards: &[Card]) {
        (self.0)(cards)
    }
}

impl<V: BoardView + ?Sized> BoardView for Box<V> {
    fn render(&mut self, cards: &[Card]) {
        (**self).render(cards)
    }
}

/// Cards of one column, in collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGroup<'a> {
    pub column: Column,
    pub cards: Vec<&'a Card>,
}

/// Split cards into the four columns, left to right. Every column is
/// present even when empty.
pub fn group_by_column(cards: &[Card]) -> Vec<ColumnGroup<'_>> {
    Column::ALL
        .into_iter()
        .map(|column| ColumnGroup {
            column,
            cards: cards.iter().filter(|c| c.column == column).collect(),
        })
        .collect()
}
