use serde::{de::DeserializeOwned, Serialize};
use taskboard_core::BoardResult;

/// A persistent local key-value facility.
///
/// Each key names one slot holding an opaque blob that is always replaced
/// as a whole.
pub trait SlotStore: Send + Sync {
    /// Read the slot. `Ok(None)` means the slot has never been written.
    fn read(&self, key: &str) -> BoardResult<Option<Vec<u8>>>;

    /// Overwrite the slot with `data`.
    fn write(&self, key: &str, data: &[u8]) -> BoardResult<()>;

    /// Where a slot lives, for log messages.
    fn describe(&self, key: &str) -> String;
}

/// Trait for serialization/deserialization strategies
/// Allows swapping JSON for another text or binary format
pub trait Serializer: Send + Sync {
    /// Serialize data to bytes
    fn serialize<T: Serialize + ?Sized>(&self, data: &T) -> BoardResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> BoardResult<T>;
}
