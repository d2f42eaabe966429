//! Global Bites storefront library.
//!
//! Page controllers for the Global Bites site, a file-backed store for the
//! cart and other persisted page state, and the environment configuration
//! shared by hosts such as the `gb-cli` binary.
//!
//! - [`pages`] - One controller per page, built on the core cart
//! - [`storage`] - [`FileStore`](storage::FileStore), one JSON file per key
//! - [`config`] - Environment-driven settings
//! - [`error`] - [`AppError`](error::AppError) for hosts driving several pages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod pages;
pub mod storage;

pub use config::StorefrontConfig;
pub use error::AppError;
pub use storage::FileStore;
