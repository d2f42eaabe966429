//! Integration tests for Global Bites.
//!
//! These tests drive several pages against one file-backed store, the way a
//! visitor moves between pages that share the browser's local storage.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p global-bites-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart survives reloads, bad files fall back to empty
//! - `order_flow` - Homepage to cart to checkout to thank-you

use std::path::Path;

use global_bites_core::CartManager;
use global_bites_storefront::FileStore;
use tempfile::TempDir;

/// A throwaway data directory standing in for one browser profile.
pub struct TestSite {
    dir: TempDir,
}

impl TestSite {
    /// Create an empty site directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// The data directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A fresh store over the data directory, as on a new page load.
    #[must_use]
    pub fn store(&self) -> FileStore {
        FileStore::new(self.dir.path())
    }

    /// A cart rehydrated from the data directory, as on a new page load.
    #[must_use]
    pub fn load_cart(&self) -> CartManager<FileStore> {
        CartManager::new(self.store())
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}
