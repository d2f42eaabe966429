//! Key-value storage seam.
//!
//! Every page reads and writes its persisted state through [`KeyValueStore`],
//! the same contract the browser's local storage offers: string values under
//! string keys, whole-value overwrite, last writer wins.

use std::collections::HashMap;

use thiserror::Error;

/// Storage keys shared by the pages.
pub mod keys {
    /// Key for the serialized cart line items.
    pub const CART: &str = "globalBitesCart";

    /// Key for the grand total stashed at checkout for the thank-you page.
    pub const LAST_ORDER_TOTAL: &str = "lastOrderTotal";

    /// Key for the food wall posts.
    pub const POSTS: &str = "globalBitesPosts";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded for storage.
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),

    /// The key cannot be represented by this backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// String key-value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value under `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// In-memory store, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(keys::CART).unwrap(), None);

        store.set(keys::CART, "[]").unwrap();
        store.set(keys::CART, "[1]").unwrap();
        assert_eq!(store.get(keys::CART).unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_remove_absent_is_ok() {
        let mut store = MemoryStore::new();
        store.remove(keys::LAST_ORDER_TOTAL).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn seed_posts<S: KeyValueStore>(mut store: S) {
            store.set(keys::POSTS, "[]").unwrap();
        }

        let mut store = MemoryStore::new();
        seed_posts(&mut store);
        assert_eq!(store.get(keys::POSTS).unwrap().as_deref(), Some("[]"));
    }
}
