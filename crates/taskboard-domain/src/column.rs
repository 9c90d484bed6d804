use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use taskboard_core::BoardError;

/// The four fixed lifecycle stages a card can occupy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    #[default]
    ToLearn,
    InProgress,
    Blocked,
    // Older boards were saved with "complete".
    #[serde(alias = "complete")]
    Completed,
}

impl Column {
    /// Board order, left to right.
    pub const ALL: [Column; 4] = [
        Column::ToLearn,
        Column::InProgress,
        Column::Blocked,
        Column::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToLearn => "to-learn",
            Self::InProgress => "in-progress",
            Self::Blocked => "blocked",
            Self::Completed => "completed",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::ToLearn => "To Learn",
            Self::InProgress => "In Progress",
            Self::Blocked => "Blocked",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact match on the serialized name. Drop targets are never normalized.
impl FromStr for Column {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| BoardError::Validation(format!("unknown column '{}'", s)))
    }
}
