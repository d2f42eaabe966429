//! Unified error handling for the storefront.
//!
//! Page controllers return their own narrow error types. Hosts that drive
//! several pages convert them into [`AppError`] with `?` and show
//! [`AppError::user_message`] to the visitor, logging the full error.

use global_bites_core::{CartError, StoreError};
use thiserror::Error;

use crate::config::ConfigError;
use crate::pages::{CheckoutError, ContactError, QuantityError, UnknownPlatform};

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Item could not be added to the cart.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Checkout was refused.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Contact form was rejected.
    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),

    /// Quantity input was rejected.
    #[error("Quantity error: {0}")]
    Quantity(#[from] QuantityError),

    /// Unknown share button.
    #[error("Share error: {0}")]
    Share(#[from] UnknownPlatform),

    /// Referenced item or post does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Message safe to show the visitor.
    ///
    /// Storage and configuration details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(_) | Self::Store(_) => "Something went wrong, please try again".to_string(),
            Self::Checkout(CheckoutError::Store(_)) => {
                "Your order could not be placed, please try again".to_string()
            }
            Self::Checkout(err) => err.to_string(),
            Self::Cart(err) => err.to_string(),
            Self::Contact(err) => err.to_string(),
            Self::Quantity(err) => err.to_string(),
            Self::Share(err) => err.to_string(),
            Self::NotFound(what) => format!("{what} was not found"),
        }
    }

    /// Whether the error comes from the environment rather than the visitor.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Store(_) | Self::Checkout(CheckoutError::Store(_))
        )
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
