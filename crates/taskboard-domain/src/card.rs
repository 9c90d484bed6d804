use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

use taskboard_core::{BoardError, BoardResult};

use crate::column::Column;
use crate::due_date;
use crate::tag::validate_tags;

/// Opaque card identifier, stored as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Fresh id from a UUIDv7: millisecond timestamp plus random bits.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CardId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub column: Column,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_due_date"
    )]
    pub due_date: Option<NaiveDate>,
}

impl Card {
    /// A new card always starts in the first column.
    pub fn new(
        id: CardId,
        title: String,
        description: String,
        tags: Vec<String>,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            column: Column::ToLearn,
            tags,
            due_date,
        }
    }

    /// Check the editable fields of a card before they are applied.
    pub fn validate_fields(title: &str, tags: &[String]) -> BoardResult<()> {
        if title.trim().is_empty() {
            return Err(BoardError::Validation(
                "card title must not be empty".to_string(),
            ));
        }
        validate_tags(tags)
    }

    pub fn validate(&self) -> BoardResult<()> {
        Self::validate_fields(&self.title, &self.tags)
    }

    pub fn update_content(
        &mut self,
        title: String,
        description: String,
        tags: Vec<String>,
        due_date: Option<NaiveDate>,
    ) {
        self.title = title;
        self.description = description;
        self.tags = tags;
        self.due_date = due_date;
    }

    pub fn move_to_column(&mut self, column: Column) {
        self.column = column;
    }

    pub fn due_label_on(&self, today: NaiveDate) -> String {
        self.due_date
            .map(|date| due_date::label_for(date, today))
            .unwrap_or_default()
    }

    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        self.due_date.is_some_and(|date| date < today)
    }
}

// Records written by the browser store an empty string for "no date".
fn lenient_due_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(due_date::parse_due_date))
}
