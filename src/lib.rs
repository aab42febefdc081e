//! trolley: stock-validated shopping cart state with write-through local storage.
//!
//! The cart lives behind explicit ports: a [`ports::CatalogClient`] resolves
//! products and stock levels, a [`ports::CartStore`] persists the cart, and
//! a [`ports::Notifier`] carries user-facing messages.
//! [`services::CartService`] is the single writer over the in-memory cart
//! and mirrors every successful mutation to the persisted slot before the
//! operation completes.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::{AppError, Cart, CartEntry, Product, Stock, StoreConfig};
pub use ports::{CartStore, CatalogClient, InMemoryCatalog, Notifier, NoopNotifier, Severity};
pub use services::{CartService, ConsoleNotifier, FileCartStore, HttpCatalogClient, LocalStore};
