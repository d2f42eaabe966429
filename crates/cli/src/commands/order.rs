//! Checkout and order confirmation commands.

use chrono::Local;
use global_bites_storefront::error::Result;
use global_bites_storefront::pages::{self, CartPage, ShareAction, ShareTarget, ThankYouPage};
use tracing::info;

use super::Session;

/// Place the order, wait out the redirect delay, then show the confirmation.
///
/// # Errors
///
/// Returns an error if the cart is empty, the address is blank, or the order
/// total cannot be stored.
pub async fn checkout(session: &mut Session, address: &str) -> Result<()> {
    let order = CartPage::new(&mut session.cart).checkout(address)?;

    info!(
        items = order.items.len(),
        address = %order.address,
        total = %order.summary.total,
        "Order placed successfully! Redirecting to confirmation..."
    );
    session.report_badge();

    tokio::time::sleep(session.config.redirect_delay).await;
    thank_you(session);
    Ok(())
}

/// Show the thank-you page.
pub fn thank_you(session: &Session) {
    let page = ThankYouPage::load(session.cart.store(), &Local::now(), &mut rand::rng());

    info!(
        order = %page.order_label(),
        delivery = %page.delivery_label(),
        total = page.total_label().as_deref().unwrap_or("-"),
        "Thank you for your order!"
    );
}

/// Press a share button.
///
/// # Errors
///
/// Returns an error for an unknown platform name.
pub fn share(session: &Session, platform: &str) -> Result<()> {
    let target: ShareTarget = platform.parse()?;

    match pages::share(target, &session.config.site_origin) {
        ShareAction::OpenUrl(url) => info!(%target, %url, "Open share dialog"),
        ShareAction::ShowMessage(message) => info!(%target, "{message}"),
    }
    Ok(())
}
