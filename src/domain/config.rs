//! Store configuration loaded from an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::AppError;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "trolley.toml";

/// Top-level configuration for the cart store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// Catalog service settings.
    #[serde(default)]
    pub catalog: CatalogApiConfig,
    /// Persistence slot settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl StoreConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file is absent.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Catalog service endpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogApiConfig {
    /// Base URL of the catalog API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CatalogApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout() }
    }
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Persistence slot settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON file backing the key-value slots.
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
    /// Slot key holding the serialized cart.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { path: default_storage_path(), key: default_storage_key() }
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".trolley/storage.json")
}

fn default_storage_key() -> String {
    "@RocketShoes:cart".to_string()
}
