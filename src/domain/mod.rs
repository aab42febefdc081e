pub mod cart;
pub mod config;
pub mod error;
pub mod product;

pub use cart::{Cart, CartEntry};
pub use config::{CONFIG_FILE, CatalogApiConfig, StorageConfig, StoreConfig};
pub use error::AppError;
pub use product::{Product, Stock};
