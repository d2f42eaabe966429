//! CLI command implementations, one module per page.

pub mod cart;
pub mod contact;
pub mod home;
pub mod order;
pub mod wall;

use std::rc::Rc;

use global_bites_core::CartManager;
use global_bites_storefront::pages::CartBadge;
use global_bites_storefront::{FileStore, StorefrontConfig};

/// One visit: the persisted cart plus the navbar badge watching it.
pub struct Session {
    pub config: StorefrontConfig,
    pub cart: CartManager<FileStore>,
    pub badge: Rc<CartBadge>,
}

impl Session {
    /// Rehydrate the cart from the data directory and attach the badge.
    pub fn open(config: StorefrontConfig) -> Self {
        let store = FileStore::new(config.data_dir.clone());
        let mut cart = CartManager::new(store);
        let badge = Rc::new(CartBadge::new());
        cart.observe(Rc::clone(&badge));

        tracing::debug!(
            data_dir = %config.data_dir.display(),
            items = cart.total_items(),
            "Session opened"
        );

        Self {
            config,
            cart,
            badge,
        }
    }

    /// Log the navbar badge, as every page shows it.
    pub fn report_badge(&self) {
        let added = self.badge.take_added();
        tracing::info!(
            count = self.badge.count(),
            pulse = self.badge.pulsing(),
            added = added.as_ref().map_or("", |id| id.as_str()),
            "Cart badge"
        );
    }
}
