//! Newtype IDs for type-safe entity references.
//!
//! Cart items are keyed by an opaque string supplied by the menu markup
//! (`data-id`), while food wall posts use a small integer. Keeping them as
//! distinct types prevents looking up a post with a cart key or vice versa.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, stable identifier of a menu item in the cart.
///
/// The value is never interpreted; two items are the same product exactly
/// when their IDs compare equal.
///
/// # Example
///
/// ```rust
/// # use global_bites_core::ItemId;
/// let id = ItemId::new("pizza-margherita");
/// assert_eq!(id.as_str(), "pizza-margherita");
/// assert_eq!(id, "pizza-margherita");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the ID and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ItemId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Identifier of a food wall post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u32);

impl PostId {
    /// Create a new post ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PostId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<PostId> for u32 {
    fn from(id: PostId) -> Self {
        id.0
    }
}
