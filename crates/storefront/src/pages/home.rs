//! Homepage controller.

use std::time::Duration;

use global_bites_core::{CartError, CartManager, KeyValueStore};
use serde::Deserialize;
use tracing::instrument;

/// Scroll offset, in pixels, past which the navbar switches to its compact style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// How long an add-to-cart button shows its confirmation.
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// The `data-*` attributes of a clicked add-to-cart button.
#[derive(Debug, Clone, Deserialize)]
pub struct AddToCartTrigger {
    pub id: String,
    pub name: String,
    /// Price exactly as written in the markup.
    pub price: String,
}

/// Temporary relabeling of a button after a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonFeedback {
    pub label: &'static str,
    pub revert_label: &'static str,
    pub revert_after: Duration,
}

/// Homepage, sharing the session cart.
pub struct Homepage<'a, S> {
    cart: &'a mut CartManager<S>,
}

impl<'a, S: KeyValueStore> Homepage<'a, S> {
    /// Attach the page to the session cart.
    pub const fn new(cart: &'a mut CartManager<S>) -> Self {
        Self { cart }
    }

    /// Handle a click on an add-to-cart button: one unit of the item.
    ///
    /// # Errors
    ///
    /// Returns an error, and shows no confirmation, if the button's price is invalid.
    #[instrument(skip(self), fields(id = %trigger.id))]
    pub fn add_to_cart(&mut self, trigger: &AddToCartTrigger) -> Result<ButtonFeedback, CartError> {
        self.cart
            .add_item(trigger.id.as_str(), &trigger.name, &trigger.price, 1)?;

        Ok(ButtonFeedback {
            label: "Added!",
            revert_label: "Add to Cart",
            revert_after: FEEDBACK_DURATION,
        })
    }

    /// Items currently in the cart, for the navbar badge.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.total_items()
    }
}

/// Whether the navbar shows its scrolled style at this offset.
#[must_use]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}
