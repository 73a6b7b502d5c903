//! Durable key/value blob storage for the persisted store snapshot.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;

/// A namespaced string blob store.
pub trait Storage: Send + Sync {
    /// Returns `None` when nothing was stored under `key`.
    fn load(&self, key: &str) -> Result<Option<String>>;

    fn save(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        fs::create_dir_all(dir.as_ref())?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        // readers never observe a half-written file
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process storage, used by tests and ephemeral servers.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn blobs(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.blobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.blobs().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.blobs().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("garden-storage-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = temp_dir();
        let storage = FileStorage::new(&dir).unwrap();
        assert_eq!(storage.load("state").unwrap(), None);

        storage.save("state", r#"{"a":1}"#).unwrap();
        assert_eq!(storage.load("state").unwrap().as_deref(), Some(r#"{"a":1}"#));

        storage.save("state", r#"{"a":2}"#).unwrap();
        assert_eq!(storage.load("state").unwrap().as_deref(), Some(r#"{"a":2}"#));

        storage.remove("state").unwrap();
        assert_eq!(storage.load("state").unwrap(), None);
        // removing twice is fine
        storage.remove("state").unwrap();

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_memory_storage_keys_are_independent() {
        let storage = MemoryStorage::new();
        storage.save("a", "1").unwrap();
        storage.save("b", "2").unwrap();
        storage.remove("a").unwrap();
        assert_eq!(storage.load("a").unwrap(), None);
        assert_eq!(storage.load("b").unwrap().as_deref(), Some("2"));
    }
}
