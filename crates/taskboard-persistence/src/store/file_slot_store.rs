use crate::store::atomic_writer::AtomicWriter;
use crate::traits::SlotStore;
use std::path::{Path, PathBuf};
use taskboard_core::{BoardError, BoardResult};

/// File-backed slot store
/// Each slot is one JSON file named after its key inside a data directory
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    /// Keys must be plain file stems so a slot can never escape the directory.
    pub fn slot_path(&self, key: &str) -> BoardResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(BoardError::Storage(format!("invalid slot key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> BoardResult<Option<Vec<u8>>> {
        let path = self.slot_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let bytes = AtomicWriter::read_all(&path)?;
        Ok(Some(bytes))
    }

    fn write(&self, key: &str, data: &[u8]) -> BoardResult<()> {
        let path = self.slot_path(key)?;
        std::fs::create_dir_all(&self.dir)?;

        // Write atomically to disk
        AtomicWriter::write_atomic(&path, data)?;

        tracing::info!("Saved {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    fn describe(&self, key: &str) -> String {
        self.dir.join(format!("{}.json", key)).display().to_string()
    }
}
