use crate::traits::Serializer;
use serde::{de::DeserializeOwned, Serialize};
use taskboard_core::{BoardError, BoardResult};

/// JSON serializer for the persisted card collection
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize<T: Serialize + ?Sized>(&self, data: &T) -> BoardResult<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(|e| BoardError::Serialization(e.to_string()))
    }

    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> BoardResult<T> {
        serde_json::from_slice(bytes).map_err(|e| BoardError::Serialization(e.to_string()))
    }
}
