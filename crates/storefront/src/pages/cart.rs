//! Cart page controller.
//!
//! Every action re-reads the cart and returns a fresh [`CartView`], so the
//! rendered line items and summary always match the cart's current state.

use global_bites_core::store::keys;
use global_bites_core::{CartManager, ItemId, KeyValueStore, LineItem, StoreError, format_usd};
use rust_decimal::{Decimal, RoundingStrategy, dec};
use thiserror::Error;
use tracing::instrument;

/// Flat delivery fee added to every order.
pub const DELIVERY_FEE: Decimal = dec!(3.99);

/// Sales tax rate applied to the subtotal.
pub const TAX_RATE: Decimal = dec!(0.08);

/// Smallest quantity accepted from the quantity input.
pub const MIN_QUANTITY: i64 = 1;

/// Largest quantity accepted from the quantity input.
pub const MAX_QUANTITY: i64 = 99;

/// Dish keywords and their emoji, checked in order against the item name.
const DISH_EMOJI: &[(&str, &str)] = &[
    ("Pizza", "🍕"),
    ("Pasta", "🍝"),
    ("Salad", "🥗"),
    ("Tacos", "🌮"),
    ("Burrito", "🫔"),
    ("Guacamole", "🥑"),
    ("Chicken", "🍗"),
    ("Naan", "🫓"),
    ("Biryani", "🍚"),
    ("Sushi", "🍣"),
    ("Ramen", "🍜"),
    ("Stir Fry", "🥢"),
    ("Fish", "🐟"),
    ("Rice", "🍚"),
];

const FALLBACK_EMOJI: &str = "🍽️";

/// Errors that stop a checkout. The cart is unchanged when any of these occur.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// There is nothing to order.
    #[error("Your cart is empty")]
    EmptyCart,

    /// The delivery address was left blank.
    #[error("Please enter your delivery address")]
    MissingAddress,

    /// The order total could not be saved for the confirmation page.
    #[error("Failed to record order: {0}")]
    Store(#[from] StoreError),
}

/// Rejected input from the quantity field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuantityError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("quantity must be between 1 and 99 (got {0})")]
    OutOfRange(i64),
}

/// Subtotal, fees and grand total of the current cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    /// Compute the summary for a subtotal. Tax is rounded to whole cents.
    #[must_use]
    pub fn from_subtotal(subtotal: Decimal) -> Self {
        let tax = (subtotal * TAX_RATE)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Self {
            subtotal,
            delivery_fee: DELIVERY_FEE,
            tax,
            total: subtotal.saturating_add(DELIVERY_FEE).saturating_add(tax),
        }
    }
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: ItemId,
    pub name: String,
    pub emoji: &'static str,
    /// Unit price, e.g. "$10.00".
    pub price: String,
    pub quantity: u32,
    /// `price × quantity`, e.g. "$20.00".
    pub line_total: String,
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            emoji: dish_emoji(&item.name),
            price: item.price.to_string(),
            quantity: item.quantity,
            line_total: format_usd(item.line_total()),
        }
    }
}

/// Cart page display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub summary: OrderSummary,
    /// The checkout control is only enabled for a non-empty cart.
    pub checkout_enabled: bool,
}

impl CartView {
    /// Whether the empty-cart message should be shown instead of line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Formatted subtotal.
    #[must_use]
    pub fn subtotal(&self) -> String {
        format_usd(self.summary.subtotal)
    }

    /// Formatted tax.
    #[must_use]
    pub fn tax(&self) -> String {
        format_usd(self.summary.tax)
    }

    /// Formatted delivery fee.
    #[must_use]
    pub fn delivery_fee(&self) -> String {
        format_usd(self.summary.delivery_fee)
    }

    /// Formatted grand total.
    #[must_use]
    pub fn total(&self) -> String {
        format_usd(self.summary.total)
    }
}

/// A successfully placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPlaced {
    pub items: Vec<LineItem>,
    pub summary: OrderSummary,
    pub address: String,
}

/// Emoji for a dish name, by the first keyword it contains.
#[must_use]
pub fn dish_emoji(name: &str) -> &'static str {
    DISH_EMOJI
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map_or(FALLBACK_EMOJI, |&(_, emoji)| emoji)
}

/// Parse and range-check text from the quantity input.
///
/// # Errors
///
/// Returns an error unless the input is a whole number from 1 to 99.
pub fn parse_quantity(raw: &str) -> Result<i64, QuantityError> {
    let quantity = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| QuantityError::NotANumber(raw.trim().to_string()))?;
    if (MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
        Ok(quantity)
    } else {
        Err(QuantityError::OutOfRange(quantity))
    }
}

/// The cart page, working on the session's cart.
pub struct CartPage<'a, S> {
    cart: &'a mut CartManager<S>,
}

impl<'a, S: KeyValueStore> CartPage<'a, S> {
    /// Attach the page to the session cart.
    pub const fn new(cart: &'a mut CartManager<S>) -> Self {
        Self { cart }
    }

    /// Current order summary.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_subtotal(self.cart.total_price())
    }

    /// Render the page.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView {
            items: self.cart.items().iter().map(CartItemView::from).collect(),
            summary: self.summary(),
            checkout_enabled: !self.cart.is_empty(),
        }
    }

    /// "+" button: one more unit.
    #[instrument(skip(self))]
    pub fn increase(&mut self, id: &str) -> CartView {
        if let Some(quantity) = self.cart.get(id).map(|item| item.quantity) {
            self.cart.update_quantity(id, i64::from(quantity) + 1);
        }
        self.view()
    }

    /// "−" button: one fewer unit, never going below one.
    #[instrument(skip(self))]
    pub fn decrease(&mut self, id: &str) -> CartView {
        let current = self.cart.get(id).map(|item| item.quantity);
        if let Some(quantity) = current.filter(|&quantity| quantity > 1) {
            self.cart.update_quantity(id, i64::from(quantity) - 1);
        }
        self.view()
    }

    /// Remove button.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: &str) -> CartView {
        self.cart.remove_item(id);
        self.view()
    }

    /// Quantity typed into the input field.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the cart unchanged, unless `raw` is a whole
    /// number from 1 to 99. Callers re-render with [`CartPage::view`].
    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, id: &str, raw: &str) -> Result<CartView, QuantityError> {
        let quantity = parse_quantity(raw)?;
        self.cart.update_quantity(id, quantity);
        Ok(self.view())
    }

    /// Place the order.
    ///
    /// Stashes the grand total for the thank-you page under
    /// [`keys::LAST_ORDER_TOTAL`] and empties the cart. The stashed amount
    /// includes delivery and tax, unlike the earlier site which kept the
    /// item subtotal there.
    ///
    /// # Errors
    ///
    /// Returns an error, without touching the cart, if the cart is empty, the
    /// address is blank, or the total cannot be stored.
    #[instrument(skip(self))]
    pub fn checkout(&mut self, address: &str) -> Result<OrderPlaced, CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let address = address.trim();
        if address.is_empty() {
            return Err(CheckoutError::MissingAddress);
        }

        let summary = self.summary();
        self.cart
            .store_mut()
            .set(keys::LAST_ORDER_TOTAL, &summary.total.to_string())?;

        let items = self.cart.items().to_vec();
        self.cart.clear();

        tracing::info!(
            items = items.len(),
            total = %summary.total,
            "Order placed"
        );

        Ok(OrderPlaced {
            items,
            summary,
            address: address.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use global_bites_core::MemoryStore;

    use super::*;

    fn sample_cart() -> CartManager<MemoryStore> {
        let mut cart = CartManager::new(MemoryStore::new());
        cart.add_item("a", "Margherita Pizza", "10", 2).unwrap();
        cart.add_item("b", "Miso Ramen", "5", 1).unwrap();
        cart
    }

    #[test]
    fn test_summary_matches_reference_order() {
        let mut cart = sample_cart();
        let page = CartPage::new(&mut cart);
        let summary = page.summary();

        assert_eq!(summary.subtotal, dec!(25));
        assert_eq!(summary.tax, dec!(2.00));
        assert_eq!(summary.delivery_fee, dec!(3.99));
        assert_eq!(summary.total, dec!(30.99));
        assert_eq!(page.view().total(), "$30.99");
    }

    #[test]
    fn test_empty_cart_view() {
        let mut cart = CartManager::new(MemoryStore::new());
        let view = CartPage::new(&mut cart).view();

        assert!(view.is_empty());
        assert!(!view.checkout_enabled);
        assert_eq!(view.subtotal(), "$0.00");
        assert_eq!(view.tax(), "$0.00");
        assert_eq!(view.total(), "$3.99");
    }

    #[test]
    fn test_tax_rounds_to_cents() {
        let summary = OrderSummary::from_subtotal(dec!(10.05));
        assert_eq!(summary.tax, dec!(0.80));
        let summary = OrderSummary::from_subtotal(dec!(0.0625));
        assert_eq!(summary.tax, dec!(0.01));
    }

    #[test]
    fn test_view_lines() {
        let mut cart = sample_cart();
        let view = CartPage::new(&mut cart).view();

        assert!(view.checkout_enabled);
        let first = view.items.first().unwrap();
        assert_eq!(first.emoji, "🍕");
        assert_eq!(first.price, "$10.00");
        assert_eq!(first.line_total, "$20.00");
        let second = view.items.get(1).unwrap();
        assert_eq!(second.emoji, "🍜");
    }

    #[test]
    fn test_dish_emoji_order_and_fallback() {
        assert_eq!(dish_emoji("Chicken Fried Rice"), "🍗");
        assert_eq!(dish_emoji("Vegetable Stir Fry"), "🥢");
        assert_eq!(dish_emoji("Beef Pho"), "🍽️");
    }

    #[test]
    fn test_increase_and_decrease() {
        let mut cart = sample_cart();
        let mut page = CartPage::new(&mut cart);

        let view = page.increase("b");
        assert_eq!(view.items.get(1).unwrap().quantity, 2);

        page.decrease("b");
        let view = page.decrease("b");
        assert_eq!(view.items.get(1).unwrap().quantity, 1);

        let view = page.increase("missing");
        assert_eq!(view.items.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut cart = sample_cart();
        let view = CartPage::new(&mut cart).remove("a");
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.subtotal(), "$5.00");
    }

    #[test]
    fn test_set_quantity_bounds() {
        let mut cart = sample_cart();
        let mut page = CartPage::new(&mut cart);

        let view = page.set_quantity("a", " 7 ").unwrap();
        assert_eq!(view.items.first().unwrap().quantity, 7);

        assert_eq!(
            page.set_quantity("a", "0"),
            Err(QuantityError::OutOfRange(0))
        );
        assert_eq!(
            page.set_quantity("a", "100"),
            Err(QuantityError::OutOfRange(100))
        );
        assert!(matches!(
            page.set_quantity("a", "lots"),
            Err(QuantityError::NotANumber(_))
        ));
        assert_eq!(page.view().items.first().unwrap().quantity, 7);
    }

    #[test]
    fn test_checkout_requires_items() {
        let mut cart = CartManager::new(MemoryStore::new());
        let err = CartPage::new(&mut cart)
            .checkout("1 Main St")
            .unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[test]
    fn test_checkout_requires_address() {
        let mut cart = sample_cart();
        let err = CartPage::new(&mut cart).checkout("   ").unwrap_err();

        assert!(matches!(err, CheckoutError::MissingAddress));
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.store().get(keys::LAST_ORDER_TOTAL).unwrap(), None);
    }

    #[test]
    fn test_checkout_stashes_total_and_clears() {
        let mut cart = sample_cart();
        let order = CartPage::new(&mut cart)
            .checkout("  221B Baker Street ")
            .unwrap();

        assert_eq!(order.address, "221B Baker Street");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.summary.total, dec!(30.99));
        assert!(cart.is_empty());
        assert_eq!(
            cart.store().get(keys::LAST_ORDER_TOTAL).unwrap().as_deref(),
            Some("30.99")
        );
        assert_eq!(
            cart.store().get(keys::CART).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_checkout_stashes_grand_total_not_subtotal() {
        let mut cart = CartManager::new(MemoryStore::new());
        cart.add_item("rice", "Jollof Rice", "10.00", 1).unwrap();
        CartPage::new(&mut cart).checkout("4 Market Square").unwrap();

        let stashed = cart.store().get(keys::LAST_ORDER_TOTAL).unwrap().unwrap();
        assert_ne!(stashed, "10");
        assert_eq!(stashed, "14.79");
    }

    #[test]
    fn test_summary_saturates_instead_of_overflowing() {
        let summary = OrderSummary::from_subtotal(Decimal::MAX);
        assert_eq!(summary.total, Decimal::MAX);
    }
}
