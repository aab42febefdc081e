//! Test doubles shared across unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{AppError, Cart};
use crate::ports::{CartStore, Notifier, Severity};

/// In-memory cart store with an injectable save failure.
///
/// Clones share the same slot, so a store handed to a service can still be
/// inspected from the test.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStore {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    slot: Option<Cart>,
    fail_saves: bool,
}

impl MemoryCartStore {
    /// The cart currently held in the slot, if any.
    pub fn persisted(&self) -> Option<Cart> {
        self.inner.borrow().slot.clone()
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn fail_saves(&self, fail: bool) {
        self.inner.borrow_mut().fail_saves = fail;
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Option<Cart> {
        self.inner.borrow().slot.clone()
    }

    fn save(&self, cart: &Cart) -> Result<(), AppError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_saves {
            return Err(AppError::Storage {
                path: "memory".to_string(),
                details: "save failure injected".to_string(),
            });
        }
        inner.slot = Some(cart.clone());
        Ok(())
    }
}

/// Notifier that records every message for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    /// All notifications delivered so far, in order.
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.messages.borrow_mut().push((severity, message.to_string()));
    }
}
