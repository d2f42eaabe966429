//! Cart count badge.

use std::cell::{Cell, RefCell};

use global_bites_core::{CartObserver, ItemId};

/// The navbar's cart count, kept current by cart notifications.
///
/// Register it with [`CartManager::observe`](global_bites_core::CartManager::observe)
/// behind an `Rc` and read it back when rendering.
#[derive(Debug, Default)]
pub struct CartBadge {
    count: Cell<u32>,
    last_added: RefCell<Option<ItemId>>,
}

impl CartBadge {
    /// Create a badge showing zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The count currently displayed.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count.get()
    }

    /// Whether the badge pulses after its last update; only non-empty carts pulse.
    #[must_use]
    pub fn pulsing(&self) -> bool {
        self.count.get() > 0
    }

    /// Take the id of the most recently added item, clearing it.
    ///
    /// The "added" highlight is shown once per add.
    pub fn take_added(&self) -> Option<ItemId> {
        self.last_added.borrow_mut().take()
    }
}

impl CartObserver for CartBadge {
    fn cart_count_changed(&self, count: u32) {
        self.count.set(count);
        tracing::trace!(count, "Cart badge updated");
    }

    fn item_added(&self, id: &ItemId) {
        *self.last_added.borrow_mut() = Some(id.clone());
    }
}
