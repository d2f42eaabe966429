//! Page controllers.
//!
//! Each page turns user events into calls on the shared
//! [`CartManager`](global_bites_core::CartManager) or on its own local data,
//! and hands back a view model for the host to render:
//!
//! - [`cart`] - Line items, order summary and checkout
//! - [`home`] - Add-to-cart buttons and the navbar scroll state
//! - [`contact`] - Contact form validation and submission
//! - [`food_wall`] - Social feed with filters and search
//! - [`thank_you`] - Order confirmation after checkout
//! - [`badge`] - Cart count badge kept current by cart notifications

pub mod badge;
pub mod cart;
pub mod contact;
pub mod food_wall;
pub mod home;
pub mod thank_you;

pub use badge::CartBadge;
pub use cart::{CartPage, CartView, CheckoutError, OrderPlaced, OrderSummary, QuantityError};
pub use contact::{ContactError, ContactForm, ContactSubmission, Field, FieldState};
pub use food_wall::{EmptyState, FoodWall, PostCard, WallFilter, WallView};
pub use home::{AddToCartTrigger, ButtonFeedback, Homepage, navbar_scrolled};
pub use thank_you::{ShareAction, ShareTarget, ThankYouPage, UnknownPlatform, share};
