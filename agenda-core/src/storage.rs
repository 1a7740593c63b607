//! String-keyed blob storage.
//!
//! Each key holds one whole blob. Writes always replace the full blob,
//! never patch it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{AgendaError, AgendaResult};

/// A key/value store of string blobs.
pub trait Storage {
    /// Read the blob stored under `key`, `None` if it was never written.
    fn get(&self, key: &str) -> AgendaResult<Option<String>>;

    /// Replace the blob stored under `key`.
    fn set(&self, key: &str, value: &str) -> AgendaResult<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> AgendaResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AgendaResult<()> {
        (**self).set(key, value)
    }
}

/// Read a JSON array blob.
///
/// An absent, unreadable or malformed blob is logged and read as empty.
pub(crate) fn load_list<T: DeserializeOwned>(storage: &impl Storage, key: &str) -> Vec<T> {
    load_list_strict(storage, key).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "stored data is unusable, treating it as empty");
        Vec::new()
    })
}

/// Read a JSON array blob, failing on anything but an absent or valid blob.
///
/// Used before rewriting a blob so unreadable data is never overwritten.
pub(crate) fn load_list_strict<T: DeserializeOwned>(
    storage: &impl Storage,
    key: &str,
) -> AgendaResult<Vec<T>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(Vec::new());
    };

    serde_json::from_str(&raw).map_err(|source| AgendaError::Corrupt {
        key: key.to_string(),
        source,
    })
}

/// Replace a blob with the JSON encoding of `items`.
pub(crate) fn save_list<T: Serialize>(
    storage: &impl Storage,
    key: &str,
    items: &[T],
) -> AgendaResult<()> {
    let content = serde_json::to_string(items)?;
    storage.set(key, &content)
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> AgendaResult<Option<String>> {
        let path = self.path_for(key);

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> AgendaResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;

        tracing::debug!(key, path = %path.display(), bytes = value.len(), "blob written");
        Ok(())
    }
}

/// In-memory storage, mostly for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> AgendaResult<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AgendaResult<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get("appointments").unwrap(), None);
    }

    #[test]
    fn test_file_storage_set_replaces_blob() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        storage.set("appointments", "[1,2,3]").unwrap();
        storage.set("appointments", "[]").unwrap();

        assert_eq!(storage.get("appointments").unwrap().as_deref(), Some("[]"));
        assert!(!dir.path().join("nested/appointments.json.tmp").exists());
    }

    #[test]
    fn test_memory_storage_keys_are_independent() {
        let storage = MemoryStorage::new();
        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();

        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
        assert_eq!(storage.get("c").unwrap(), None);
    }

    #[test]
    fn test_load_list_corrupt_blob_is_empty() {
        let storage = MemoryStorage::new();
        storage.set("numbers", "{not json").unwrap();

        let numbers: Vec<u32> = load_list(&storage, "numbers");
        assert!(numbers.is_empty());
    }

    #[test]
    fn test_load_list_wrong_shape_is_empty() {
        let storage = MemoryStorage::new();
        storage.set("numbers", r#"{"a":1}"#).unwrap();

        let numbers: Vec<u32> = load_list(&storage, "numbers");
        assert!(numbers.is_empty());
    }

    #[test]
    fn test_load_list_strict_reports_corruption() {
        let storage = MemoryStorage::new();
        assert!(load_list_strict::<u32>(&storage, "numbers").unwrap().is_empty());

        storage.set("numbers", "[1, 2").unwrap();
        let result = load_list_strict::<u32>(&storage, "numbers");
        assert!(matches!(result, Err(AgendaError::Corrupt { ref key, .. }) if key == "numbers"));
    }

    #[test]
    fn test_save_then_load_list() {
        let storage = MemoryStorage::new();
        save_list(&storage, "numbers", &[3u32, 1, 2]).unwrap();

        let numbers: Vec<u32> = load_list(&storage, "numbers");
        assert_eq!(numbers, vec![3, 1, 2]);
    }
}
