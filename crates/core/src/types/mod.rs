//! Core types for Global Bites.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod line_item;
pub mod post;
pub mod price;

pub use email::{Email, EmailError};
pub use id::{ItemId, PostId};
pub use line_item::LineItem;
pub use post::{Post, PostKind};
pub use price::{Price, PriceError, format_usd};
