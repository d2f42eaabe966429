//! Global Bites Core - Shared types and the shopping cart core.
//!
//! This crate provides the pieces every page of the Global Bites site shares:
//! - [`types`] - Newtype wrappers for item IDs, prices, emails, line items and posts
//! - [`store`] - The key-value storage seam (browser-style local storage)
//! - [`cart`] - The persisted cart: store adapter, cart manager and observers
//!
//! # Architecture
//!
//! The core crate does no file or network I/O. Storage is reached through the
//! [`store::KeyValueStore`] trait; the storefront crate supplies a file-backed
//! implementation and tests use [`store::MemoryStore`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod store;
pub mod types;

pub use cart::{CartError, CartManager, CartObserver, CartStore};
pub use store::{KeyValueStore, MemoryStore, StoreError};
pub use types::*;
