use std::io;

use thiserror::Error;

/// Library-wide error type for cart operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Requested amount exceeds the available stock.
    #[error("Requested amount for product {product_id} exceeds available stock ({available})")]
    OutOfStock { product_id: u64, available: u32 },

    /// Product has no entry in the cart.
    #[error("Product {0} is not in the cart")]
    NotInCart(u64),

    /// Requested amount is below the minimum of one unit.
    #[error("Invalid amount {amount} for product {product_id}: must be at least 1")]
    InvalidAmount { product_id: u64, amount: u32 },

    /// Catalog request failed (transport error, bad status, or malformed body).
    #[error("Catalog request failed: {0}")]
    Catalog(String),

    /// Persistence slot could not be written.
    #[error("Failed to persist cart at {path}: {details}")]
    Storage { path: String, details: String },

    /// JSON encoding or decoding failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    /// Whether this is a business-rule rejection, as opposed to an
    /// infrastructure failure.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AppError::OutOfStock { .. } | AppError::NotInCart(_) | AppError::InvalidAmount { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_are_distinguished_from_failures() {
        assert!(AppError::OutOfStock { product_id: 1, available: 0 }.is_rejection());
        assert!(AppError::NotInCart(1).is_rejection());
        assert!(AppError::InvalidAmount { product_id: 1, amount: 0 }.is_rejection());

        assert!(!AppError::Catalog("timeout".to_string()).is_rejection());
        assert!(!AppError::Configuration("bad url".to_string()).is_rejection());
    }
}
