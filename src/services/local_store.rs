//! File-backed key-value slots emulating the storefront's local storage.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{AppError, Cart, StorageConfig};
use crate::ports::CartStore;

/// String-keyed slots persisted as a single JSON object file.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file is created on the first write; parent directories are
    /// created as needed.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Fetch and decode the value stored under `key`.
    ///
    /// An absent file, unparsable content, a missing key, and an
    /// undecodable value all yield `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut slots = self.read_slots();
        let value = slots.remove(key)?;
        serde_json::from_value(value).ok()
    }

    /// Store `value` under `key`, preserving all other slots.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let mut slots = self.read_slots();
        slots.insert(key.to_string(), serde_json::to_value(value)?);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.storage_error(e))?;
        }

        let content = serde_json::to_string_pretty(&slots)?;
        fs::write(&self.path, content).map_err(|e| self.storage_error(e))
    }

    fn read_slots(&self) -> BTreeMap<String, Value> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    fn storage_error(&self, source: std::io::Error) -> AppError {
        AppError::Storage { path: self.path.display().to_string(), details: source.to_string() }
    }
}

/// [`CartStore`] backed by a [`LocalStore`] slot.
#[derive(Debug, Clone)]
pub struct FileCartStore {
    store: LocalStore,
    key: String,
}

impl FileCartStore {
    /// Create a store from persistence settings.
    pub fn new(config: &StorageConfig) -> Self {
        Self { store: LocalStore::new(&config.path), key: config.key.clone() }
    }
}

impl CartStore for FileCartStore {
    fn load(&self) -> Option<Cart> {
        self.store.get(&self.key)
    }

    fn save(&self, cart: &Cart) -> Result<(), AppError> {
        self.store.set(&self.key, cart)
    }
}
