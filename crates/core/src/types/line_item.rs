//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ItemId, Price};

/// One product and its quantity in the cart.
///
/// Serialized with the field names the site has always stored under
/// `globalBitesCart`: `{ "id", "name", "price", "quantity" }`.
///
/// While an item is in a cart its `quantity` is at least 1; the cart manager
/// removes items instead of storing a zero quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identity.
    pub id: ItemId,
    /// Display label; not part of identity.
    pub name: String,
    /// Unit price, fixed when the item was first added.
    pub price: Price,
    /// Number of units.
    pub quantity: u32,
}

impl LineItem {
    /// Create a new line item.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, price: Price, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Price of the whole line (`price × quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.times(self.quantity)
    }
}
