//! File-backed durable key/value storage.

use std::collections::BTreeMap;
use std::path::PathBuf;

use stickerdesk_core::Result;
use stickerdesk_core::storage::LocalStorage;

use super::atomic_json::AtomicJsonFile;
use crate::paths::DeskPaths;

/// [`LocalStorage`] persisted as one JSON object in `storage.json`.
///
/// Responsibilities:
/// - Read single keys without locking (writes replace the file atomically)
/// - Apply `set_item`/`remove_item` as locked read-modify-write updates
///
/// Does NOT:
/// - Encrypt values (plaintext, mode 600 on Unix)
/// - Cache anything in memory; every call hits the file
pub struct FileLocalStorage {
    file: AtomicJsonFile<BTreeMap<String, String>>,
}

impl FileLocalStorage {
    /// Storage at the default location (`<config_dir>/storage.json`).
    pub fn new(paths: &DeskPaths) -> Result<Self> {
        Ok(Self::with_path(paths.storage_file()?))
    }

    /// Storage at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}

impl LocalStorage for FileLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let entries = self.file.load()?.unwrap_or_default();
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.file.update(BTreeMap::new(), |entries| {
            entries.insert(key.to_string(), value.to_string());
            Ok(())
        })?;
        tracing::debug!(key, path = %self.file.path().display(), "Stored item");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        if !self.file.path().exists() {
            return Ok(());
        }
        self.file.update(BTreeMap::new(), |entries| {
            entries.remove(key);
            Ok(())
        })?;
        tracing::debug!(key, path = %self.file.path().display(), "Removed item");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use stickerdesk_core::auth::AUTH_TOKEN_KEY;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::with_path(temp_dir.path().join("storage.json"));

        assert_eq!(storage.get_item(AUTH_TOKEN_KEY).unwrap(), None);
        // Removing from a missing file creates nothing
        storage.remove_item(AUTH_TOKEN_KEY).unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::with_path(temp_dir.path().join("storage.json"));

        storage.set_item(AUTH_TOKEN_KEY, "tok-1").unwrap();
        storage.set_item("other", "keep").unwrap();
        assert_eq!(storage.get_item(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("tok-1"));

        storage.remove_item(AUTH_TOKEN_KEY).unwrap();
        assert_eq!(storage.get_item(AUTH_TOKEN_KEY).unwrap(), None);
        assert_eq!(storage.get_item("other").unwrap().as_deref(), Some("keep"));
    }

    #[test]
    fn test_values_survive_a_new_handle() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        FileLocalStorage::with_path(path.clone())
            .set_item(AUTH_TOKEN_KEY, "persisted")
            .unwrap();

        let reopened = FileLocalStorage::with_path(path.clone());
        assert_eq!(
            reopened.get_item(AUTH_TOKEN_KEY).unwrap().as_deref(),
            Some("persisted")
        );

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(raw["custom-auth-token"], "persisted");
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileLocalStorage::with_path(path);
        assert!(storage.get_item(AUTH_TOKEN_KEY).is_err());
    }
}
