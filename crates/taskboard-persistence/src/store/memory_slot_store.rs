use crate::traits::SlotStore;
use parking_lot::Mutex;
use std::collections::HashMap;
use taskboard_core::{BoardError, BoardResult};

/// In-process slot store with an optional total byte quota.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: Mutex<HashMap<String, Vec<u8>>>,
    quota: Option<usize>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse writes that would bring the total stored size over `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            quota: Some(bytes),
        }
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.slots.lock().get(key).cloned()
    }

    pub fn remove(&self, key: &str) -> Option<Vec<u8>> {
        self.slots.lock().remove(key)
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> BoardResult<Option<Vec<u8>>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, data: &[u8]) -> BoardResult<()> {
        let mut slots = self.slots.lock();
        if let Some(quota) = self.quota {
            let others: usize = slots
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            if others + data.len() > quota {
                return Err(BoardError::Storage(format!(
                    "quota exceeded: {} bytes requested, {} allowed",
                    others + data.len(),
                    quota
                )));
            }
        }
        slots.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn describe(&self, key: &str) -> String {
        format!("memory:{}", key)
    }
}
