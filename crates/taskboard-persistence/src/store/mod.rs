pub mod atomic_writer;
pub mod file_slot_store;
pub mod memory_slot_store;

pub use atomic_writer::AtomicWriter;
pub use file_slot_store::FileSlotStore;
pub use memory_slot_store::MemorySlotStore;
