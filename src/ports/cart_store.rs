//! Persistence port for the cart slot.

use crate::domain::{AppError, Cart};

/// Port for durable cart persistence.
///
/// Implementations own a single slot; the whole cart is rewritten on every
/// successful mutation (write-through).
pub trait CartStore {
    /// Load the persisted cart.
    ///
    /// Absent or unreadable content is `None`; loading never fails.
    fn load(&self) -> Option<Cart>;

    /// Persist the cart, replacing the previous contents of the slot.
    fn save(&self, cart: &Cart) -> Result<(), AppError>;
}
