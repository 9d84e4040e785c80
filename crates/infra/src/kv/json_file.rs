//! File-backed key/value store.
//!
//! The whole mapping lives in one JSON object (`{"key": "value", ...}`),
//! rewritten on every mutation through a sibling temp file + rename.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use primecity_core::{KeyValueStore, StorageError, StorageResult};

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process only.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store at `path`. The file is created lazily on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return BTreeMap::new(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "store file unreadable; treating as empty");
                return BTreeMap::new();
            }
        };

        if raw.trim().is_empty() {
            return BTreeMap::new();
        }

        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "store file malformed; treating as empty");
                BTreeMap::new()
            }
        }
    }

    fn persist(&self, map: &BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let encoded = serde_json::to_string_pretty(map)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn mutate<F>(&self, f: F) -> StorageResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StorageError::unavailable("json file store lock poisoned"))?;
        let mut map = self.load();
        f(&mut map);
        self.persist(&map)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: String) -> StorageResult<()> {
        self.mutate(|map| {
            map.insert(key.to_string(), value);
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.mutate(|map| {
            map.remove(key);
        })
    }
}
