//! Key/value storage adapters.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use dashmap::DashMap;
use directories::ProjectDirs;

use crate::infrastructure::ports::{StorageError, StoragePort};

/// File-backed storage.
///
/// Stores key-value pairs in a JSON object file. The default location is
/// the platform config directory:
/// - Linux: ~/.config/spellbook/storage.json
/// - macOS: ~/Library/Application Support/io.spellbook.spellbook/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\spellbook\spellbook\config\storage.json
pub struct FileStorage {
    storage_path: PathBuf,
    /// In-memory copy of the file contents; only replaced after a successful write
    cache: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Open storage at `path`, loading existing data if the file exists.
    ///
    /// A missing file starts empty. So does an unreadable or corrupt one,
    /// with a warning; it is overwritten on the next write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let storage_path = path.into();

        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!(path = %storage_path.display(), error = %e, "Failed to parse storage file");
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!(path = %storage_path.display(), error = %e, "Failed to read storage file");
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!(path = %storage_path.display(), "File storage initialized");

        Self {
            storage_path,
            cache: RwLock::new(cache),
        }
    }

    /// Open storage in the platform config directory.
    pub fn at_default_location() -> Self {
        let path = match ProjectDirs::from("io", "spellbook", "spellbook") {
            Some(dirs) => dirs.config_dir().join("storage.json"),
            // Fallback to current directory if project dirs unavailable
            None => PathBuf::from("spellbook_storage.json"),
        };
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    fn persist(&self, cache: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io("create_dir", e))?;
            }
        }

        let data = serde_json::to_string_pretty(cache).map_err(StorageError::serialization)?;
        fs::write(&self.storage_path, data).map_err(|e| StorageError::io("write", e))
    }
}

impl StoragePort for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .cache
            .read()
            .map_err(|e| StorageError::io("load", e))?;
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .cache
            .write()
            .map_err(|e| StorageError::io("save", e))?;
        let mut next = guard.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .cache
            .write()
            .map_err(|e| StorageError::io("remove", e))?;
        if !guard.contains_key(key) {
            return Ok(());
        }
        let mut next = guard.clone();
        next.remove(key);
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }
}

/// In-memory storage; contents vanish with the process.
#[derive(Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
