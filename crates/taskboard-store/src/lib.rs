pub mod store;

pub use store::CardStore;

use taskboard_core::AppConfig;
use taskboard_domain::BoardView;
use taskboard_persistence::{FileSlotStore, SlotStore, StorageAdapter};

/// Composition root: a file-backed card store for `config`, with `view`
/// already painted from the loaded collection.
pub fn open_board<V: BoardView>(config: &AppConfig, view: V) -> CardStore<FileSlotStore, V> {
    let slots = FileSlotStore::new(config.effective_data_dir());
    tracing::info!("Opening board from {}", slots.describe(&config.storage.slot));
    CardStore::new(StorageAdapter::new(slots, config.storage.slot.clone()), view)
}
