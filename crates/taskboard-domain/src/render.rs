use chrono::NaiveDate;
use std::fmt::Write;

use crate::due_date;
use crate::view::{group_by_column, BoardView};
use crate::Card;

/// Render the board as plain text, one section per column.
///
/// ```text
/// To Learn (1)
///   - Learn Rust [Back-End] (Due in 3 days)
/// In Progress (0)
/// ```
///
/// Overdue cards use `!` instead of `-` as their bullet.
pub fn render_board(cards: &[Card], today: NaiveDate) -> String {
    let mut out = String::new();
    for group in group_by_column(cards) {
        let _ = writeln!(out, "{} ({})", group.column.title(), group.cards.len());
        for card in group.cards {
            out.push_str(&render_card_line(card, today));
            out.push('\n');
        }
    }
    out
}

fn render_card_line(card: &Card, today: NaiveDate) -> String {
    let bullet = if card.is_overdue_on(today) { '!' } else { '-' };
    let mut line = format!("  {} {}", bullet, card.title);
    if !card.tags.is_empty() {
        let _ = write!(line, " [{}]", card.tags.join(", "));
    }
    let label = card.due_label_on(today);
    if !label.is_empty() {
        let _ = write!(line, " ({})", label);
    }
    line
}

/// A view that keeps the latest rendered text frame.
#[derive(Debug, Default, Clone)]
pub struct TextView {
    today: Option<NaiveDate>,
    frame: String,
    frames_rendered: usize,
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin "today" instead of reading the local clock at render time.
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            today: Some(today),
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> &str {
        &self.frame
    }

    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }
}

impl BoardView for TextView {
    fn render(&mut self, cards: &[Card]) {
        let today = self.today.unwrap_or_else(due_date::today);
        self.frame = render_board(cards, today);
        self.frames_rendered += 1;
    }
}
