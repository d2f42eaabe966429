//! Food wall post records.
//!
//! Posts are stored under `globalBitesPosts` as camelCase JSON, matching the
//! records the site seeds on first visit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PostId;

/// Who wrote a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostKind {
    Customer,
    Chef,
}

impl std::fmt::Display for PostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Chef => write!(f, "chef"),
        }
    }
}

/// A food wall post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    /// Display name of the author.
    pub user: String,
    /// Avatar emoji.
    pub avatar: String,
    #[serde(rename = "type")]
    pub kind: PostKind,
    /// Full text shown in the overlay.
    pub content: String,
    /// Short teaser shown on the card.
    pub snippet: String,
    #[serde(default)]
    pub dish: Option<String>,
    /// Star rating from 1 to 5, customers only.
    #[serde(default)]
    pub rating: Option<u8>,
    pub likes: u32,
    pub comments: u32,
    pub timestamp: DateTime<Utc>,
    /// Stagger index for the card entrance.
    #[serde(default)]
    pub delay: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_under_type() {
        let json = r#"{
            "id": 2,
            "user": "Marco Romano",
            "avatar": "👨‍🍳",
            "type": "chef",
            "content": "Fresh pasta today.",
            "snippet": "Fresh pasta...",
            "dish": "Fresh Pasta",
            "rating": null,
            "likes": 24,
            "comments": 5,
            "timestamp": "2026-01-01T12:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.kind, PostKind::Chef);
        assert_eq!(post.rating, None);
        assert_eq!(post.delay, 0);

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["type"], "chef");
    }
}
