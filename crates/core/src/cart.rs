//! Persisted shopping cart.
//!
//! [`CartStore`] serializes the line items under [`keys::CART`] and
//! [`CartManager`] owns the in-memory list for the current page load. Every
//! mutation saves the whole list and then tells the registered
//! [`CartObserver`]s the new item count.
//!
//! A manager is built once per session and handed to each page by reference.
//! Two managers over the same storage do not see each other's changes until
//! they are rebuilt; the last save wins.

use std::fmt;
use std::rc::Rc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::store::{KeyValueStore, StoreError, keys};
use crate::types::{ItemId, LineItem, Price, PriceError};

/// Errors returned by cart mutations.
///
/// Both variants are invalid-argument errors: the cart is left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The price text of a newly added item is not a valid price.
    #[error("invalid price for item {id}: {source}")]
    InvalidPrice {
        id: ItemId,
        #[source]
        source: PriceError,
    },

    /// Items must be added at least one at a time.
    #[error("quantity for item {0} must be at least 1")]
    InvalidQuantity(ItemId),
}

// =============================================================================
// Store Adapter
// =============================================================================

/// Reads and writes the cart's line items in a [`KeyValueStore`].
#[derive(Debug)]
pub struct CartStore<S> {
    store: S,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Wrap a key-value store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted line items.
    ///
    /// Never fails: a missing value, an unreadable backend, or a payload that
    /// is not a list of line items all yield an empty list. Entries with a
    /// zero quantity and repeated ids are dropped so the loaded list upholds
    /// the cart's invariants.
    #[must_use]
    pub fn load(&self) -> Vec<LineItem> {
        let raw = match self.store.get(keys::CART) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored cart, starting empty");
                return Vec::new();
            }
        };

        let stored: Vec<LineItem> = match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, "Stored cart is malformed, starting empty");
                return Vec::new();
            }
        };

        let mut items: Vec<LineItem> = Vec::with_capacity(stored.len());
        for item in stored {
            if item.quantity == 0 {
                tracing::debug!(id = %item.id, "Dropping stored item with zero quantity");
            } else if items.iter().any(|existing| existing.id == item.id) {
                tracing::debug!(id = %item.id, "Dropping duplicate stored item");
            } else {
                items.push(item);
            }
        }
        items
    }

    /// Overwrite the persisted line items with `items`.
    ///
    /// # Errors
    ///
    /// Returns an error if the items cannot be encoded or the backend write fails.
    pub fn save(&mut self, items: &[LineItem]) -> Result<(), StoreError> {
        let json = serde_json::to_string(items)?;
        self.store.set(keys::CART, &json)
    }

    /// Borrow the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the underlying store.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Unwrap the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

// =============================================================================
// Observers
// =============================================================================

/// Receives cart change notifications.
pub trait CartObserver {
    /// The total item count changed (or may have changed) to `count`.
    fn cart_count_changed(&self, count: u32);

    /// An item was just added; used for the one-shot "added" pulse.
    fn item_added(&self, _id: &ItemId) {}
}

impl<T: CartObserver + ?Sized> CartObserver for Rc<T> {
    fn cart_count_changed(&self, count: u32) {
        (**self).cart_count_changed(count);
    }

    fn item_added(&self, id: &ItemId) {
        (**self).item_added(id);
    }
}

// =============================================================================
// Cart Manager
// =============================================================================

/// The authoritative cart for the current session.
pub struct CartManager<S> {
    items: Vec<LineItem>,
    store: CartStore<S>,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: KeyValueStore> CartManager<S> {
    /// Build a cart by rehydrating whatever `store` holds.
    pub fn new(store: S) -> Self {
        let store = CartStore::new(store);
        let items = store.load();
        tracing::debug!(items = items.len(), "Cart rehydrated");
        Self {
            items,
            store,
            observers: Vec::new(),
        }
    }

    /// Register an observer for the rest of the manager's life.
    ///
    /// The observer is immediately told the current count so it can render.
    pub fn observe(&mut self, observer: impl CartObserver + 'static) {
        observer.cart_count_changed(self.total_items());
        self.observers.push(Box::new(observer));
    }

    /// Add `quantity` units of an item whose price is given as text.
    ///
    /// If the id is already in the cart its quantity grows and its stored
    /// name and price stay as they were; the price text is still validated.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidPrice`] if `price` does not parse and
    /// [`CartError::InvalidQuantity`] if `quantity` is zero.
    pub fn add_item(
        &mut self,
        id: impl Into<ItemId>,
        name: &str,
        price: &str,
        quantity: u32,
    ) -> Result<(), CartError> {
        let id = id.into();
        match Price::parse(price) {
            Ok(price) => self.add_price(id, name, price, quantity),
            Err(source) => Err(CartError::InvalidPrice { id, source }),
        }
    }

    /// Add `quantity` units of an item at an already parsed price.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `quantity` is zero.
    pub fn add_price(
        &mut self,
        id: impl Into<ItemId>,
        name: &str,
        price: Price,
        quantity: u32,
    ) -> Result<(), CartError> {
        let id = id.into();
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(id));
        }

        if let Some(existing) = self.items.iter_mut().find(|item| item.id == id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            tracing::debug!(id = %id, quantity = existing.quantity, "Cart item quantity increased");
        } else {
            tracing::debug!(id = %id, quantity, price = %price, "Cart item added");
            self.items.push(LineItem::new(id.clone(), name, price, quantity));
        }

        self.persist();
        self.notify_count();
        for observer in &self.observers {
            observer.item_added(&id);
        }
        Ok(())
    }

    /// Set an item's quantity. Zero or less removes the item.
    ///
    /// Unknown ids are ignored: nothing is saved and nobody is notified.
    pub fn update_quantity(&mut self, id: impl AsRef<str>, quantity: i64) {
        let id = id.as_ref();
        if quantity <= 0 {
            if self.contains(id) {
                self.remove_item(id);
            }
            return;
        }

        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(id, "Ignoring quantity update for item not in cart");
            return;
        };
        item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        tracing::debug!(id, quantity = item.quantity, "Cart item quantity set");

        self.persist();
        self.notify_count();
    }

    /// Remove an item. Removing an absent id still saves and notifies.
    pub fn remove_item(&mut self, id: impl AsRef<str>) {
        let id = id.as_ref();
        self.items.retain(|item| item.id != id);
        tracing::debug!(id, "Cart item removed");

        self.persist();
        self.notify_count();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("Cart cleared");

        self.persist();
        self.notify_count();
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.quantity))
    }

    /// Sum of `price × quantity` over all items, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |total, item| total.saturating_add(item.line_total()))
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line item.
    #[must_use]
    pub fn get(&self, id: impl AsRef<str>) -> Option<&LineItem> {
        let id = id.as_ref();
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether the cart holds `id`.
    #[must_use]
    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.get(id).is_some()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the underlying key-value store.
    pub const fn store(&self) -> &S {
        self.store.store()
    }

    /// Mutably borrow the underlying key-value store, e.g. to stash checkout data.
    pub const fn store_mut(&mut self) -> &mut S {
        self.store.store_mut()
    }

    /// Drop the manager and hand back its store.
    pub fn into_store(self) -> S {
        self.store.into_inner()
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.items) {
            tracing::error!(error = %e, "Failed to persist cart");
        }
    }

    fn notify_count(&self) {
        let count = self.total_items();
        for observer in &self.observers {
            observer.cart_count_changed(count);
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for CartManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartManager")
            .field("items", &self.items)
            .field("store", &self.store)
            .field("observers", &self.observers.len())
            .finish()
    }
}
