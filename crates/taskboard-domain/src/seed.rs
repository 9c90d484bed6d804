use crate::{Card, CardId, Column};

/// Number of cards in the fallback dataset.
pub const SEED_CARD_COUNT: usize = 9;

const SEED: [(&str, &str, &str, Column, &[&str]); SEED_CARD_COUNT] = [
    (
        "1",
        "HTML Fundamentals",
        "Semantic elements, forms and document structure.",
        Column::Completed,
        &["Front-End"],
    ),
    (
        "2",
        "CSS Flexbox and Grid",
        "Build responsive layouts without frameworks.",
        Column::Completed,
        &["Front-End", "Design"],
    ),
    (
        "3",
        "JavaScript Basics",
        "Variables, functions, arrays and objects.",
        Column::InProgress,
        &["Front-End"],
    ),
    (
        "4",
        "DOM Manipulation",
        "Query, create and update elements from scripts.",
        Column::InProgress,
        &["Front-End"],
    ),
    (
        "5",
        "Git and GitHub",
        "Branching, merging and pull requests.",
        Column::Blocked,
        &["Tooling"],
    ),
    (
        "6",
        "Asynchronous JavaScript",
        "Promises, async/await and the event loop.",
        Column::ToLearn,
        &["Front-End"],
    ),
    (
        "7",
        "Node.js",
        "Run JavaScript on the server and use npm packages.",
        Column::ToLearn,
        &["Back-End"],
    ),
    (
        "8",
        "REST APIs",
        "Design endpoints and consume them with fetch.",
        Column::ToLearn,
        &["Back-End", "Front-End"],
    ),
    (
        "9",
        "SQL Databases",
        "Tables, joins and indexes.",
        Column::ToLearn,
        &["Back-End"],
    ),
];

/// The fixed collection used when no valid persisted board exists.
pub fn seed_cards() -> Vec<Card> {
    SEED.iter()
        .map(|(id, title, description, column, tags)| Card {
            id: CardId::from(*id),
            title: title.to_string(),
            description: description.to_string(),
            column: *column,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            due_date: None,
        })
        .collect()
}
