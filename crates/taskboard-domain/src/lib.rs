pub mod card;
pub mod column;
pub mod commands;
pub mod due_date;
pub mod operations;
pub mod render;
pub mod seed;
pub mod tag;
pub mod view;

pub use card::{Card, CardId};
pub use column::Column;
pub use due_date::{due_date_label, due_date_label_on, is_overdue, is_overdue_on, parse_due_date};
pub use operations::CardOperations;
pub use render::{render_board, TextView};
pub use seed::{seed_cards, SEED_CARD_COUNT};
pub use tag::{TagSelection, MAX_TAGS};
pub use view::{group_by_column, BoardView, ColumnGroup, FnView, NullView};
