//! Catalog client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{AppError, CatalogApiConfig, Product, Stock};
use crate::ports::CatalogClient;

/// HTTP client for the catalog service.
///
/// Requests are bounded by the configured timeout and are not retried; any
/// transport error, non-2xx status, or undecodable body surfaces as
/// [`AppError::Catalog`].
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    base_url: Url,
    client: Client,
}

impl HttpCatalogClient {
    /// Create a new HTTP client from catalog settings.
    pub fn new(config: &CatalogApiConfig) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| AppError::Configuration(format!("Invalid catalog base URL: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { base_url, client })
    }

    fn get<T: DeserializeOwned>(&self, segment: &str, product_id: u64) -> Result<T, AppError> {
        let url =
            format!("{}/{segment}/{product_id}", self.base_url.as_str().trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| AppError::Catalog(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Catalog(format!(
                "unexpected status {} from {url}",
                status.as_u16()
            )));
        }

        response.json().map_err(|e| AppError::Catalog(format!("malformed response from {url}: {e}")))
    }
}

impl CatalogClient for HttpCatalogClient {
    fn product(&self, product_id: u64) -> Result<Product, AppError> {
        self.get("products", product_id)
    }

    fn stock(&self, product_id: u64) -> Result<Stock, AppError> {
        self.get("stock", product_id)
    }
}
