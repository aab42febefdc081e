//! Cart collection and its invariants.

use serde::{Deserialize, Serialize};

use super::Product;

/// A product in the cart together with the selected quantity.
///
/// Serialized flat: the product fields and `amount` sit at the same level,
/// which is also the persisted shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Catalog record this entry was created from.
    #[serde(flatten)]
    pub product: Product,
    /// Selected quantity; always at least 1.
    pub amount: u32,
}

/// Ordered collection of cart entries, unique by product id.
///
/// Insertion order is preserved across all mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of entries (not units).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry for `product_id` exists.
    pub fn contains(&self, product_id: u64) -> bool {
        self.entries.iter().any(|e| e.product.id == product_id)
    }

    /// Current amount for `product_id`, 0 when absent.
    pub fn amount_of(&self, product_id: u64) -> u32 {
        self.entries.iter().find(|e| e.product.id == product_id).map_or(0, |e| e.amount)
    }

    /// Append a new entry.
    ///
    /// Returns `false` (and leaves the cart unchanged) when an entry with
    /// the same product id already exists.
    pub fn insert(&mut self, entry: CartEntry) -> bool {
        if self.contains(entry.product.id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Replace the amount of the entry for `product_id`.
    ///
    /// Returns `false` when no such entry exists.
    pub fn set_amount(&mut self, product_id: u64, amount: u32) -> bool {
        match self.entries.iter_mut().find(|e| e.product.id == product_id) {
            Some(entry) => {
                entry.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Remove the entry for `product_id`, preserving the order of the rest.
    ///
    /// Returns `false` when no such entry exists.
    pub fn remove(&mut self, product_id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.product.id != product_id);
        self.entries.len() != before
    }

    /// Sum of `price × amount` over all entries.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.product.price * f64::from(e.amount)).sum()
    }
}
