use chrono::NaiveDate;
use taskboard_core::AppConfig;
use taskboard_domain::{
    due_date_label_on, seed_cards, CardId, CardOperations, Column, NullView, TextView,
    SEED_CARD_COUNT,
};
use taskboard_persistence::{MemorySlotStore, SlotStore, StorageAdapter};
use taskboard_store::{open_board, CardStore};
use tempfile::TempDir;

const SLOT: &str = "taskboard-cards";

fn memory_store() -> CardStore<MemorySlotStore, TextView> {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    CardStore::new(
        StorageAdapter::new(MemorySlotStore::new(), SLOT),
        TextView::with_today(today),
    )
}

fn file_config(dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.data_dir = Some(dir.path().to_path_buf());
    config
}

// Creating cards

#[test]
fn add_card_from_seed_scenario() {
    let mut store = memory_store();
    let card = store
        .add_card("Learn Rust", "", vec!["Back-End".into()], "")
        .unwrap();

    let all = store.get_all();
    assert_eq!(all.len(), 10);
    let last = all.last().unwrap();
    assert_eq!(last.title, "Learn Rust");
    assert_eq!(last.column, Column::ToLearn);
    assert_eq!(last.tags, vec!["Back-End"]);
    assert_eq!(last, &card);
    assert_eq!(
        all.iter().filter(|c| c.id == card.id).count(),
        1,
        "new id must be unique"
    );
}

#[test]
fn add_many_cards_keeps_ids_unique() {
    let mut store = memory_store();
    for i in 0..50 {
        store
            .add_card(&format!("Card {}", i), "", vec![], "")
            .unwrap();
    }
    let mut ids: Vec<_> = store.get_all().iter().map(|c| c.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), SEED_CARD_COUNT + 50);
}

#[test]
fn whitespace_title_is_rejected() {
    let mut store = memory_store();
    assert!(store.add_card(" \t\n", "desc", vec![], "").is_none());
    assert_eq!(store.get_all(), seed_cards().as_slice());
    assert_eq!(store.view().frames_rendered(), 1);
}

// Editing, deleting and moving

#[test]
fn update_changes_content_but_not_column() {
    let mut store = memory_store();
    let id = CardId::from("2");
    assert!(store.update_card(&id, "Modern CSS", "Container queries", vec![], "2024-01-03"));

    let card = store.get_card(&id).unwrap();
    assert_eq!(card.title, "Modern CSS");
    assert_eq!(card.description, "Container queries");
    assert!(card.tags.is_empty());
    assert_eq!(card.column, Column::Completed);
    assert!(store.view().last_frame().contains("Modern CSS (Due in 2 days)"));
}

#[test]
fn delete_is_idempotent() {
    let mut store = memory_store();
    let id = CardId::from("7");
    assert!(store.delete_card(&id));
    assert_eq!(store.len(), SEED_CARD_COUNT - 1);
    assert!(!store.delete_card(&id));
    assert_eq!(store.len(), SEED_CARD_COUNT - 1);
}

#[test]
fn move_changes_only_column() {
    let mut store = memory_store();
    let id = CardId::from("6");
    let before = store.get_card(&id).unwrap().clone();

    assert!(store.move_card(&id, "blocked"));
    let after = store.get_card(&id).unwrap();
    assert_eq!(after.column, Column::Blocked);
    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(after.tags, before.tags);
    assert_eq!(after.due_date, before.due_date);

    assert!(!store.move_card(&id, "not-a-column"));
    assert_eq!(store.get_card(&id).unwrap().column, Column::Blocked);
}

#[test]
fn reorder_drops_card_before_target() {
    let mut store = memory_store();
    assert!(store.reorder_card(&"9".into(), "in-progress", Some(&"3".into())));

    let in_progress: Vec<_> = store
        .cards_in(Column::InProgress)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(in_progress, ["9", "3", "4"]);
    assert!(store
        .view()
        .last_frame()
        .contains("In Progress (3)\n  - SQL Databases"));
}

// Persistence

#[test]
fn every_mutation_is_persisted() {
    let mut store = memory_store();
    store.add_card("Persist me", "", vec![], "").unwrap();
    store.move_card(&"1".into(), "in-progress");

    let reloaded = store.storage().load();
    assert_eq!(reloaded, store.get_all());
}

#[test]
fn quota_failure_keeps_session_state() {
    let mut store = CardStore::new(
        StorageAdapter::new(MemorySlotStore::with_quota(64), SLOT),
        NullView,
    );
    let card = store.add_card("Too big to save", "", vec![], "").unwrap();

    assert!(!store.is_persisted());
    assert_eq!(store.get_card(&card.id), Some(&card));
    assert!(store.storage().store().read(SLOT).unwrap().is_none());
}

#[test]
fn file_board_survives_reopen() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let config = file_config(&dir);

    let mut store = open_board(&config, NullView);
    assert_eq!(store.get_all(), seed_cards().as_slice());
    let card = store
        .add_card("Learn Rust", "The book", vec!["Back-End".into()], "2099-01-01")
        .unwrap();
    store.move_card(&card.id, "in-progress");
    store.delete_card(&"1".into());
    let expected = store.get_all().to_vec();
    drop(store);

    let reopened = open_board(&config, NullView);
    assert_eq!(reopened.get_all(), expected.as_slice());
    assert!(dir.path().join("taskboard-cards.json").exists());
}

#[test]
fn corrupt_file_falls_back_to_seed() {
    let dir = TempDir::new().expect("failed to create temp dir");
    std::fs::write(dir.path().join("taskboard-cards.json"), b"{\"broken\":").unwrap();

    let store = open_board(&file_config(&dir), NullView);
    assert_eq!(store.get_all(), seed_cards().as_slice());
}

#[test]
fn rendered_due_labels_follow_derivation() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut store = memory_store();
    store
        .add_card("Overdue", "", vec![], "2023-12-30")
        .unwrap();

    let label = due_date_label_on("2023-12-30", today);
    assert_eq!(label, "2 days overdue");
    assert!(store
        .view()
        .last_frame()
        .contains(&format!("  ! Overdue ({})", label)));
}
