//! Cart page commands.

use global_bites_storefront::error::Result;
use global_bites_storefront::pages::{CartPage, CartView};
use tracing::info;

use super::Session;

/// Log the cart contents and order summary.
pub fn render(view: &CartView) {
    if view.is_empty() {
        info!("Your cart is empty");
    }
    for item in &view.items {
        info!(
            "{} {} x{} ({} each) = {}",
            item.emoji, item.name, item.quantity, item.price, item.line_total
        );
    }
    info!(
        subtotal = %view.subtotal(),
        delivery = %view.delivery_fee(),
        tax = %view.tax(),
        total = %view.total(),
        checkout = if view.checkout_enabled { "enabled" } else { "disabled" },
        "Order summary"
    );
}

pub fn show(session: &mut Session) {
    render(&CartPage::new(&mut session.cart).view());
    session.report_badge();
}

/// # Errors
///
/// Returns an error if the price or quantity is invalid.
pub fn add(session: &mut Session, id: &str, name: &str, price: &str, quantity: u32) -> Result<()> {
    session.cart.add_item(id, name, price, quantity)?;
    show(session);
    Ok(())
}

pub fn update(session: &mut Session, id: &str, quantity: i64) {
    session.cart.update_quantity(id, quantity);
    show(session);
}

/// # Errors
///
/// Returns an error if the value is not a whole number from 1 to 99.
pub fn set(session: &mut Session, id: &str, value: &str) -> Result<()> {
    let view = CartPage::new(&mut session.cart).set_quantity(id, value)?;
    render(&view);
    session.report_badge();
    Ok(())
}

pub fn increase(session: &mut Session, id: &str) {
    render(&CartPage::new(&mut session.cart).increase(id));
    session.report_badge();
}

pub fn decrease(session: &mut Session, id: &str) {
    render(&CartPage::new(&mut session.cart).decrease(id));
    session.report_badge();
}

pub fn remove(session: &mut Session, id: &str) {
    render(&CartPage::new(&mut session.cart).remove(id));
    session.report_badge();
}

pub fn clear(session: &mut Session) {
    session.cart.clear();
    show(session);
}
