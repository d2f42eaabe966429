//! Contact form command.

use global_bites_storefront::error::Result;
use global_bites_storefront::pages::{ContactForm, FieldState};
use tracing::{info, warn};

/// Validate every field, then submit.
///
/// # Errors
///
/// Returns an error listing the fields that failed validation.
pub fn submit(form: &ContactForm) -> Result<()> {
    for (field, state) in form.validate() {
        if let FieldState::Invalid(message) = state {
            warn!(%field, "{message}");
        }
    }

    let submission = form.submit()?;
    info!(
        name = %submission.name,
        "Success! Your message has been sent. We'll get back to you soon!"
    );
    Ok(())
}
