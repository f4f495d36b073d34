//! Local key-value layout storage
//!
//! Mirrors the browser-local substrate used by anonymous sessions: the whole
//! layout collection round-trips as one JSON document under a single key.
//! The substrate is capacity-limited in practice (~5MB in a browser); usage
//! is reported by the settings surface, never enforced here.

use crate::backend::PersistenceBackend;
use crate::format::StoredLayout;
use crate::{Result, StoreError};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;
use widget_model::LayoutId;

/// Storage key holding the serialized layout collection
pub const LAYOUTS_KEY: &str = "custom_layouts";

/// Minimal key-value substrate contract, shaped like browser local storage
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory key-value storage for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rough usage estimate across all keys, in bytes
    pub fn usage_bytes(&self) -> usize {
        self.entries
            .read()
            .unwrap()
            .iter()
            .map(|(key, value)| key.len() + value.len())
            .sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }
}

/// File-backed key-value storage, one file per key under a directory
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Layout backend over a key-value substrate
pub struct LocalStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> LocalStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the stored collection. Missing data means an empty collection; a
    /// parse failure also degrades to empty rather than failing the caller.
    fn read_collection(&self) -> Result<Vec<StoredLayout>> {
        let Some(raw) = self.storage.get(LAYOUTS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(layouts) => Ok(layouts),
            Err(e) => {
                tracing::warn!("Failed to parse stored layouts, starting empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn write_collection(&self, layouts: &[StoredLayout]) -> Result<()> {
        let raw = serde_json::to_string(layouts)?;
        self.storage.set(LAYOUTS_KEY, &raw)
    }
}

impl<S: KeyValueStorage> PersistenceBackend for LocalStore<S> {
    fn list(&self) -> Result<Vec<StoredLayout>> {
        self.read_collection()
    }

    fn create(&self, layout: &StoredLayout) -> Result<()> {
        let mut layouts = self.read_collection()?;
        layouts.push(layout.clone());
        self.write_collection(&layouts)
    }

    fn update(&self, id: &LayoutId, layout: &StoredLayout) -> Result<()> {
        let mut layouts = self.read_collection()?;
        let Some(slot) = layouts.iter_mut().find(|stored| &stored.id == id) else {
            return Err(StoreError::LayoutNotFound(id.clone()));
        };
        *slot = layout.clone();
        self.write_collection(&layouts)
    }

    fn delete(&self, id: &LayoutId) -> Result<()> {
        let mut layouts = self.read_collection()?;
        layouts.retain(|stored| &stored.id != id);
        self.write_collection(&layouts)
    }
}
