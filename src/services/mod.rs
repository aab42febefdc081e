mod cart_service;
mod catalog_http;
mod console_notifier;
mod local_store;

pub use cart_service::CartService;
pub use catalog_http::HttpCatalogClient;
pub use console_notifier::ConsoleNotifier;
pub use local_store::{FileCartStore, LocalStore};
