use crate::ports::{CartStore, CatalogClient, Notifier};
use crate::services::CartService;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CatalogClient, S: CartStore, N: Notifier> {
    service: CartService<C, S>,
    notifier: N,
}

impl<C: CatalogClient, S: CartStore, N: Notifier> AppContext<C, S, N> {
    /// Create a new application context.
    pub fn new(service: CartService<C, S>, notifier: N) -> Self {
        Self { service, notifier }
    }

    /// Get a reference to the cart service.
    pub fn service(&self) -> &CartService<C, S> {
        &self.service
    }

    /// Get a mutable reference to the cart service.
    pub fn service_mut(&mut self) -> &mut CartService<C, S> {
        &mut self.service
    }

    /// Get a reference to the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
