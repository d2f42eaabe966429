//! Homepage commands.

use global_bites_storefront::error::Result;
use global_bites_storefront::pages::{AddToCartTrigger, Homepage, navbar_scrolled};
use tracing::info;

use super::Session;

/// Click an add-to-cart button.
///
/// # Errors
///
/// Returns an error if the button's price is not a valid amount.
pub fn add_to_cart(session: &mut Session, id: String, name: String, price: String) -> Result<()> {
    let trigger = AddToCartTrigger { id, name, price };
    let mut page = Homepage::new(&mut session.cart);
    let feedback = page.add_to_cart(&trigger)?;

    info!(
        item = %trigger.name,
        button = feedback.label,
        reverts_to = feedback.revert_label,
        after_ms = feedback.revert_after.as_millis(),
        "Added to cart"
    );
    session.report_badge();
    Ok(())
}

/// Report whether the navbar is in its scrolled style.
pub fn scroll(offset: f64) {
    info!(offset, scrolled = navbar_scrolled(offset), "Navbar");
}
