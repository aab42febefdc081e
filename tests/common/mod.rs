//! Shared testing utilities for trolley integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use trolley::CartService;
use trolley::domain::{CatalogApiConfig, StorageConfig, StoreConfig};
use trolley::services::{FileCartStore, HttpCatalogClient};

#[allow(dead_code)]
pub const CART_KEY: &str = "@RocketShoes:cart";

/// Testing harness: a mockito catalog server plus temp-dir backed storage.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    pub server: mockito::ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a fresh server and an isolated storage directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let server = mockito::Server::new();
        Self { root, server }
    }

    /// Path of the JSON file backing the local storage slots.
    pub fn storage_path(&self) -> PathBuf {
        self.root.path().join("storage.json")
    }

    /// Store configuration pointing at this context's server and storage.
    pub fn config(&self) -> StoreConfig {
        StoreConfig {
            catalog: CatalogApiConfig { base_url: self.server.url(), timeout_secs: 2 },
            storage: StorageConfig { path: self.storage_path(), key: CART_KEY.to_string() },
        }
    }

    /// Build a cart service over this context's catalog and storage.
    pub fn service(&self) -> CartService<HttpCatalogClient, FileCartStore> {
        let config = self.config();
        let catalog =
            HttpCatalogClient::new(&config.catalog).expect("Failed to build catalog client");
        CartService::new(catalog, FileCartStore::new(&config.storage))
    }

    /// Mock the stock endpoint for a product.
    pub fn mock_stock(&mut self, id: u64, amount: u32) -> mockito::Mock {
        self.server
            .mock("GET", format!("/stock/{id}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"id": {id}, "amount": {amount}}}"#))
            .create()
    }

    /// Mock the product endpoint for a product.
    pub fn mock_product(&mut self, id: u64, title: &str, price: f64) -> mockito::Mock {
        self.server
            .mock("GET", format!("/products/{id}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(
                r#"{{"id": {id}, "title": "{title}", "price": {price}, "image": "https://img.example/{id}.jpg"}}"#
            ))
            .create()
    }

    /// Raw contents of the storage file, if it exists.
    pub fn raw_storage(&self) -> Option<String> {
        fs::read_to_string(self.storage_path()).ok()
    }

    /// The cart slot as a JSON value, if persisted.
    pub fn persisted_cart(&self) -> Option<serde_json::Value> {
        let content = self.raw_storage()?;
        let mut slots: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&content).ok()?;
        slots.remove(CART_KEY)
    }

    /// Write a config file for CLI invocations and return its path.
    pub fn write_config(&self) -> PathBuf {
        let path = self.root.path().join("trolley.toml");
        let content = format!(
            "[catalog]\nbase_url = \"{}\"\ntimeout_secs = 2\n\n[storage]\npath = \"{}\"\n",
            self.server.url(),
            self.storage_path().display()
        );
        fs::write(&path, content).expect("Failed to write test config");
        path
    }

    /// Build a command for invoking the compiled `trolley` binary.
    pub fn cli(&self) -> assert_cmd::Command {
        let mut cmd =
            assert_cmd::Command::cargo_bin("trolley").expect("Failed to locate trolley binary");
        cmd.current_dir(self.root.path()).arg("--config").arg(self.write_config());
        cmd
    }
}
