//! Catalog records consumed by the cart.

use serde::{Deserialize, Serialize};

/// A product as returned by the catalog service.
///
/// Everything except `id` is opaque to the cart logic and carried through
/// to persistence verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: f64,
    /// Image URL shown by the storefront.
    pub image: String,
}

/// Available stock for a product.
///
/// `amount` is the authoritative upper bound for the in-cart quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// Catalog identifier.
    pub id: u64,
    /// Units available.
    pub amount: u32,
}
