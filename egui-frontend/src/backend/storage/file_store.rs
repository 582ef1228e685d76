//! # File Key-Value Store
//!
//! Persists every key in one JSON object file at the root of the data
//! directory:
//!
//! ```text
//! data/
//! └── storage.json    ← {"transactions": "[...]", "theme": "dark"}
//! ```
//!
//! Values are stored as strings, exactly as they would be in browser local
//! storage, so the `transactions` entry holds a JSON document inside a JSON
//! string. Every write goes through a temp file followed by a rename so a
//! crash mid-write never leaves a truncated `storage.json` behind.
//!
//! A `storage.json` that is not a JSON object is moved aside to
//! `storage.corrupt-<timestamp>.json` and the store starts empty, so later
//! writes still succeed.

use anyhow::{anyhow, Result};
use chrono::Local;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::traits::KeyValueStore;

const STORAGE_FILE_NAME: &str = "storage.json";

pub struct FileKeyValueStore {
    base_directory: PathBuf,
    /// Serialises access to the storage file
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Open (and create if needed) a store rooted at `base_directory`
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("STORE: created data directory {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn storage_file_path(&self) -> PathBuf {
        self.base_directory.join(STORAGE_FILE_NAME)
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let path = self.storage_file_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                let backup = self.move_aside(&path)?;
                warn!(
                    "STORE: {} is not valid JSON ({}), moved it to {} and started empty",
                    path.display(),
                    e,
                    backup.display()
                );
                Ok(BTreeMap::new())
            }
        }
    }

    /// Rename an unreadable storage file out of the way, returning its new path
    fn move_aside(&self, path: &Path) -> Result<PathBuf> {
        let stamp = Local::now().format("%Y%m%dT%H%M%S%.3f");
        let backup = self.base_directory.join(format!("storage.corrupt-{}.json", stamp));
        fs::rename(path, &backup)
            .map_err(|e| anyhow!("Could not move corrupt storage file {}: {}", path.display(), e))?;
        Ok(backup)
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>> {
        self.write_lock.lock().map_err(|_| anyhow!("storage lock poisoned"))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let path = self.storage_file_path();
        let temp_path = self.base_directory.join(format!("{}.tmp", STORAGE_FILE_NAME));

        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &path)?;

        debug!("STORE: wrote {} keys to {}", entries.len(), path.display());
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock()?;
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock()?;
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_values_survive_reopen() -> Result<()> {
        let temp_dir = TempDir::new()?;

        let store = FileKeyValueStore::new(temp_dir.path())?;
        store.set("theme", "dark")?;
        store.set("transactions", "[]")?;
        drop(store);

        let reopened = FileKeyValueStore::new(temp_dir.path())?;
        assert_eq!(reopened.get("theme")?.as_deref(), Some("dark"));
        assert_eq!(reopened.get("transactions")?.as_deref(), Some("[]"));
        assert_eq!(reopened.get("missing")?, None);
        Ok(())
    }

    #[test]
    fn test_creates_missing_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let nested = temp_dir.path().join("a").join("b");

        let store = FileKeyValueStore::new(&nested)?;
        store.set("theme", "light")?;

        assert!(nested.join("storage.json").is_file());
        assert!(!nested.join("storage.json.tmp").exists());
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_moved_aside() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileKeyValueStore::new(temp_dir.path())?;
        fs::write(store.storage_file_path(), "{not json")?;

        assert_eq!(store.get("theme")?, None);
        store.set("theme", "dark")?;
        assert_eq!(store.get("theme")?.as_deref(), Some("dark"));

        let backups: Vec<PathBuf> = fs::read_dir(temp_dir.path())?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with("storage.corrupt-"))
            })
            .collect();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0])?, "{not json");
        Ok(())
    }
}
