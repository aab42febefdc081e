//! The cart store: authoritative in-memory cart with stock-validated,
//! write-through mutations.

use crate::domain::{AppError, Cart, CartEntry};
use crate::ports::{CartStore, CatalogClient};

/// Authoritative cart state plus the collaborators needed to mutate it.
///
/// Mutating operations take `&mut self`, so the borrow checker serializes
/// them; there is no window in which two read-modify-write cycles can
/// interleave. Each operation validates against the snapshot held at call
/// entry, builds the next cart value, persists it, and only then installs
/// it in memory. Either a fully-applied cart is committed to memory and
/// storage together, or nothing changes.
pub struct CartService<C: CatalogClient, S: CartStore> {
    catalog: C,
    store: S,
    cart: Cart,
}

impl<C: CatalogClient, S: CartStore> CartService<C, S> {
    /// Create a service, loading the cart persisted in `store`.
    ///
    /// Absent or unreadable storage yields an empty cart.
    pub fn new(catalog: C, store: S) -> Self {
        let cart = store.load().unwrap_or_default();
        Self { catalog, store, cart }
    }

    /// Read-only snapshot of the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of `product_id` to the cart.
    ///
    /// The first add of a product fetches its catalog record and appends an
    /// entry with amount 1; subsequent adds increment the existing entry.
    /// Rejected with [`AppError::OutOfStock`] when the resulting amount
    /// would exceed the available stock.
    pub fn add_product(&mut self, product_id: u64) -> Result<(), AppError> {
        let current = self.cart.amount_of(product_id);
        let desired = current + 1;

        let stock = self.catalog.stock(product_id)?;
        if desired > stock.amount {
            return Err(AppError::OutOfStock { product_id, available: stock.amount });
        }

        let mut next = self.cart.clone();
        if current > 0 {
            next.set_amount(product_id, desired);
        } else {
            // Catalog lookups happen before the first mutation, so a failed
            // fetch leaves nothing to roll back.
            let product = self.catalog.product(product_id)?;
            next.insert(CartEntry { product, amount: 1 });
        }

        self.commit(next)
    }

    /// Remove the entry for `product_id` from the cart.
    ///
    /// Rejected with [`AppError::NotInCart`] when no such entry exists;
    /// this is an expected outcome, not a crash condition.
    pub fn remove_product(&mut self, product_id: u64) -> Result<(), AppError> {
        let mut next = self.cart.clone();
        if !next.remove(product_id) {
            return Err(AppError::NotInCart(product_id));
        }
        self.commit(next)
    }

    /// Set the entry for `product_id` to the absolute `amount`.
    ///
    /// Amounts below 1 are rejected; dropping an entry goes through
    /// [`Self::remove_product`] instead. An absent entry is a hard abort.
    pub fn update_product_amount(&mut self, product_id: u64, amount: u32) -> Result<(), AppError> {
        if amount < 1 {
            return Err(AppError::InvalidAmount { product_id, amount });
        }

        let stock = self.catalog.stock(product_id)?;
        if amount > stock.amount {
            return Err(AppError::OutOfStock { product_id, available: stock.amount });
        }

        let mut next = self.cart.clone();
        if !next.set_amount(product_id, amount) {
            return Err(AppError::NotInCart(product_id));
        }

        self.commit(next)
    }

    /// Persist `next` and only then install it as the in-memory cart, so a
    /// storage failure leaves the observable state at its pre-call value.
    fn commit(&mut self, next: Cart) -> Result<(), AppError> {
        self.store.save(&next)?;
        self.cart = next;
        Ok(())
    }
}
