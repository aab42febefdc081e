//! Catalog service port definition.

use crate::domain::{AppError, Product, Stock};

/// Port for product and stock lookups.
pub trait CatalogClient {
    /// Fetch the catalog record for a product.
    fn product(&self, product_id: u64) -> Result<Product, AppError>;

    /// Fetch the current stock level for a product.
    fn stock(&self, product_id: u64) -> Result<Stock, AppError>;
}

/// In-memory catalog for tests and offline use.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<(Product, u32)>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product with the given stock level.
    pub fn with_product(mut self, product: Product, available: u32) -> Self {
        self.products.retain(|(p, _)| p.id != product.id);
        self.products.push((product, available));
        self
    }
}

impl CatalogClient for InMemoryCatalog {
    fn product(&self, product_id: u64) -> Result<Product, AppError> {
        self.products
            .iter()
            .find(|(p, _)| p.id == product_id)
            .map(|(p, _)| p.clone())
            .ok_or_else(|| AppError::Catalog(format!("product {product_id} not found")))
    }

    fn stock(&self, product_id: u64) -> Result<Stock, AppError> {
        self.products
            .iter()
            .find(|(p, _)| p.id == product_id)
            .map(|(p, available)| Stock { id: p.id, amount: *available })
            .ok_or_else(|| AppError::Catalog(format!("stock for product {product_id} not found")))
    }
}
