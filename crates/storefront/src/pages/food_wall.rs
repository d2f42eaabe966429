//! Food wall: the social feed of customer and chef posts.
//!
//! Posts are read from [`keys::POSTS`]. A visitor with nothing stored sees a
//! small set of sample posts dated relative to the visit.

use chrono::{DateTime, Duration, Utc};
use global_bites_core::store::keys;
use global_bites_core::{KeyValueStore, Post, PostId, PostKind};
use tracing::instrument;

/// Dish keywords and their emoji, checked in order against the dish name.
const DISH_EMOJI: &[(&str, &str)] = &[
    ("Pizza", "🍕"),
    ("Chicken", "🍗"),
    ("Tacos", "🌮"),
    ("Sushi", "🍣"),
    ("Pasta", "🍝"),
    ("Curry", "🍛"),
];

const FALLBACK_EMOJI: &str = "🍽️";

/// Caption used on cards without a dish.
const DEFAULT_CAPTION: &str = "Global Bites";

const MAX_STARS: u8 = 5;

/// Which posts the wall shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallFilter {
    #[default]
    All,
    Customer,
    Chef,
    /// Five-star reviews and everything chefs post.
    Featured,
}

impl WallFilter {
    /// Read a filter button's `data-filter` value. Unknown names show everything.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "customer" => Self::Customer,
            "chef" => Self::Chef,
            "featured" => Self::Featured,
            _ => Self::All,
        }
    }

    /// Whether `post` passes this filter.
    #[must_use]
    pub fn matches(self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Customer => post.kind == PostKind::Customer,
            Self::Chef => post.kind == PostKind::Chef,
            Self::Featured => post.rating == Some(MAX_STARS) || post.kind == PostKind::Chef,
        }
    }
}

/// One rendered polaroid card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: PostId,
    pub emoji: &'static str,
    /// Caption under the photo: the dish, or the restaurant name.
    pub caption: String,
    pub user: String,
    pub avatar: String,
    pub is_chef: bool,
    pub snippet: String,
    /// Star string such as "⭐⭐⭐⭐☆", for rated posts.
    pub stars: Option<String>,
    pub dish: Option<String>,
    pub time_ago: String,
    /// Full text and counters shown on hover.
    pub content: String,
    pub likes: u32,
    pub comments: u32,
    pub delay: u32,
}

impl PostCard {
    fn new(post: &Post, now: DateTime<Utc>) -> Self {
        let dish = post.dish.as_deref().unwrap_or("");
        Self {
            id: post.id,
            emoji: dish_emoji(dish),
            caption: post
                .dish
                .clone()
                .unwrap_or_else(|| DEFAULT_CAPTION.to_string()),
            user: post.user.clone(),
            avatar: post.avatar.clone(),
            is_chef: post.kind == PostKind::Chef,
            snippet: post.snippet.clone(),
            stars: post.rating.map(rating_stars),
            dish: post.dish.clone(),
            time_ago: time_ago(post.timestamp, now),
            content: post.content.clone(),
            likes: post.likes,
            comments: post.comments,
            delay: post.delay,
        }
    }
}

/// Message shown when no cards match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

const NO_POSTS: EmptyState = EmptyState {
    title: "No posts found",
    hint: "Be the first to share your Global Bites experience!",
};

const NO_MATCHES: EmptyState = EmptyState {
    title: "No matching posts",
    hint: "Try different search terms",
};

/// The rendered wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallView {
    pub cards: Vec<PostCard>,
    /// Set exactly when `cards` is empty.
    pub empty_state: Option<EmptyState>,
}

impl WallView {
    fn build(posts: &[&Post], now: DateTime<Utc>, when_empty: EmptyState) -> Self {
        let cards: Vec<PostCard> = posts.iter().map(|post| PostCard::new(post, now)).collect();
        let empty_state = cards.is_empty().then_some(when_empty);
        Self { cards, empty_state }
    }
}

/// The food wall page.
#[derive(Debug, Clone)]
pub struct FoodWall {
    posts: Vec<Post>,
    filter: WallFilter,
}

impl FoodWall {
    /// Load the stored posts, or the sample posts if none are stored.
    #[must_use]
    pub fn load(store: &impl KeyValueStore, now: DateTime<Utc>) -> Self {
        let stored = match store.get(keys::POSTS) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored posts");
                None
            }
        };

        let posts = stored
            .and_then(|raw| match serde_json::from_str::<Vec<Post>>(&raw) {
                Ok(posts) => Some(posts),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored posts are malformed, using samples");
                    None
                }
            })
            .unwrap_or_else(|| sample_posts(now));

        Self::with_posts(posts)
    }

    /// Build a wall from a known list of posts.
    #[must_use]
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            filter: WallFilter::All,
        }
    }

    /// All posts, unfiltered.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// The active filter.
    #[must_use]
    pub const fn filter(&self) -> WallFilter {
        self.filter
    }

    /// Switch filters (a filter button was clicked).
    pub fn set_filter(&mut self, filter: WallFilter) {
        tracing::debug!(?filter, "Food wall filter changed");
        self.filter = filter;
    }

    /// Posts passing the active filter, in stored order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| self.filter.matches(post))
            .collect()
    }

    /// Render the filtered wall.
    #[must_use]
    pub fn view(&self, now: DateTime<Utc>) -> WallView {
        WallView::build(&self.filtered(), now, NO_POSTS)
    }

    /// Posts whose text, author or dish contains `query`, ignoring case.
    ///
    /// Searches every post regardless of the active filter. A blank query
    /// yields the filtered posts instead.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Post> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.filtered();
        }

        self.posts
            .iter()
            .filter(|post| {
                post.content.to_lowercase().contains(&query)
                    || post.user.to_lowercase().contains(&query)
                    || post
                        .dish
                        .as_ref()
                        .is_some_and(|dish| dish.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Render search results.
    #[instrument(skip(self))]
    #[must_use]
    pub fn search_view(&self, query: &str, now: DateTime<Utc>) -> WallView {
        if query.trim().is_empty() {
            return self.view(now);
        }
        let results = self.search(query);
        tracing::debug!(results = results.len(), "Food wall searched");
        WallView::build(&results, now, NO_MATCHES)
    }

    /// Text shown when a card is opened.
    #[must_use]
    pub fn post_detail(&self, id: PostId) -> Option<String> {
        self.posts
            .iter()
            .find(|post| post.id == id)
            .map(|post| format!("Post by {}:\n\n{}", post.user, post.content))
    }
}

/// Relative age of a post: "Just now", "5m ago", "3h ago", "2d ago".
///
/// Timestamps in the future count as just now.
#[must_use]
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();
    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}

/// Filled stars for the rating, then empty stars up to five.
#[must_use]
pub fn rating_stars(rating: u8) -> String {
    let filled = rating.min(MAX_STARS);
    format!(
        "{}{}",
        "⭐".repeat(usize::from(filled)),
        "☆".repeat(usize::from(MAX_STARS - filled))
    )
}

/// Emoji for a dish, by the first keyword it contains.
#[must_use]
pub fn dish_emoji(dish: &str) -> &'static str {
    DISH_EMOJI
        .iter()
        .find(|(keyword, _)| dish.contains(keyword))
        .map_or(FALLBACK_EMOJI, |&(_, emoji)| emoji)
}

/// The posts shown to a first-time visitor.
#[must_use]
pub fn sample_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post {
            id: PostId::new(1),
            user: "Sarah M.".to_string(),
            avatar: "👩".to_string(),
            kind: PostKind::Customer,
            content: "Just tried the Butter Chicken for the first time and WOW! The flavors are incredible! So authentic and rich. Definitely ordering again!".to_string(),
            snippet: "The Butter Chicken was absolutely amazing! Rich, creamy, and perfectly spiced...".to_string(),
            dish: Some("Butter Chicken".to_string()),
            rating: Some(5),
            likes: 12,
            comments: 3,
            timestamp: now - Duration::hours(2),
            delay: 0,
        },
        Post {
            id: PostId::new(2),
            user: "Marco Romano".to_string(),
            avatar: "👨‍🍳".to_string(),
            kind: PostKind::Chef,
            content: "Buongiorno! Today we're making fresh pasta dough with semolina flour. The key is letting it rest properly for that perfect al dente texture.".to_string(),
            snippet: "Fresh pasta making in progress! The secret is in the resting time...".to_string(),
            dish: Some("Fresh Pasta".to_string()),
            rating: None,
            likes: 24,
            comments: 5,
            timestamp: now - Duration::hours(5),
            delay: 1,
        },
        Post {
            id: PostId::new(3),
            user: "David L.".to_string(),
            avatar: "👨".to_string(),
            kind: PostKind::Customer,
            content: "The Jerk Chicken had the perfect amount of spice! So tender and flavorful. Felt like I was in Jamaica!".to_string(),
            snippet: "Jerk Chicken transported me straight to the Caribbean! Perfect spice blend...".to_string(),
            dish: Some("Jerk Chicken".to_string()),
            rating: Some(5),
            likes: 8,
            comments: 2,
            timestamp: now - Duration::days(1),
            delay: 2,
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use global_bites_core::MemoryStore;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 18, 30, 0).unwrap()
    }

    fn ids(posts: &[&Post]) -> Vec<u32> {
        posts.iter().map(|post| post.id.as_u32()).collect()
    }

    fn review(id: u32, rating: Option<u8>, dish: Option<&str>) -> Post {
        Post {
            id: PostId::new(id),
            user: "Priya K.".to_string(),
            avatar: "👩".to_string(),
            kind: PostKind::Customer,
            content: "Lovely evening.".to_string(),
            snippet: "Lovely...".to_string(),
            dish: dish.map(ToString::to_string),
            rating,
            likes: 0,
            comments: 0,
            timestamp: now(),
            delay: 0,
        }
    }

    #[test]
    fn test_seeds_samples_when_nothing_stored() {
        let wall = FoodWall::load(&MemoryStore::new(), now());
        assert_eq!(wall.posts().len(), 3);
        assert_eq!(wall.filter(), WallFilter::All);
    }

    #[test]
    fn test_seeds_samples_when_stored_posts_malformed() {
        let mut store = MemoryStore::new();
        store.set(keys::POSTS, "[{\"id\":\"x\"}]").unwrap();
        let wall = FoodWall::load(&store, now());
        assert_eq!(wall.posts().len(), 3);
    }

    #[test]
    fn test_loads_stored_posts() {
        let mut store = MemoryStore::new();
        let posts = vec![review(7, Some(4), Some("Green Curry"))];
        store
            .set(keys::POSTS, &serde_json::to_string(&posts).unwrap())
            .unwrap();

        let wall = FoodWall::load(&store, now());
        assert_eq!(wall.posts(), posts.as_slice());
    }

    #[test]
    fn test_filters() {
        let mut wall = FoodWall::with_posts(vec![
            review(1, Some(5), None),
            review(2, Some(3), None),
            Post {
                kind: PostKind::Chef,
                ..review(3, None, None)
            },
        ]);

        assert_eq!(ids(&wall.filtered()), vec![1, 2, 3]);
        wall.set_filter(WallFilter::Customer);
        assert_eq!(ids(&wall.filtered()), vec![1, 2]);
        wall.set_filter(WallFilter::Chef);
        assert_eq!(ids(&wall.filtered()), vec![3]);
        wall.set_filter(WallFilter::Featured);
        assert_eq!(ids(&wall.filtered()), vec![1, 3]);
    }

    #[test]
    fn test_filter_names() {
        assert_eq!(WallFilter::from_name("chef"), WallFilter::Chef);
        assert_eq!(WallFilter::from_name(" Featured "), WallFilter::Featured);
        assert_eq!(WallFilter::from_name("customer"), WallFilter::Customer);
        assert_eq!(WallFilter::from_name("all"), WallFilter::All);
        assert_eq!(WallFilter::from_name("trending"), WallFilter::All);
    }

    #[test]
    fn test_search_matches_content_user_and_dish() {
        let wall = FoodWall::load(&MemoryStore::new(), now());

        assert_eq!(ids(&wall.search("JAMAICA")), vec![3]);
        assert_eq!(ids(&wall.search("marco")), vec![2]);
        assert_eq!(ids(&wall.search("chicken")), vec![1, 3]);
        assert!(wall.search("sushi").is_empty());
    }

    #[test]
    fn test_search_ignores_filter_but_blank_query_does_not() {
        let mut wall = FoodWall::load(&MemoryStore::new(), now());
        wall.set_filter(WallFilter::Chef);

        assert_eq!(ids(&wall.search("chicken")), vec![1, 3]);
        assert_eq!(ids(&wall.search("   ")), vec![2]);
    }

    #[test]
    fn test_views_and_empty_states() {
        let mut wall = FoodWall::with_posts(vec![review(1, Some(4), None)]);

        let view = wall.view(now());
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.empty_state, None);

        wall.set_filter(WallFilter::Chef);
        let view = wall.view(now());
        assert!(view.cards.is_empty());
        assert_eq!(view.empty_state, Some(NO_POSTS));

        let view = wall.search_view("pizza", now());
        assert_eq!(view.empty_state, Some(NO_MATCHES));
    }

    #[test]
    fn test_card_fields() {
        let wall = FoodWall::load(&MemoryStore::new(), now());
        let view = wall.view(now());

        let first = view.cards.first().unwrap();
        assert_eq!(first.emoji, "🍗");
        assert_eq!(first.caption, "Butter Chicken");
        assert_eq!(first.stars.as_deref(), Some("⭐⭐⭐⭐⭐"));
        assert_eq!(first.time_ago, "2h ago");
        assert!(!first.is_chef);

        let chef = view.cards.get(1).unwrap();
        assert!(chef.is_chef);
        assert_eq!(chef.stars, None);
        assert_eq!(chef.emoji, "🍝");

        let no_dish = PostCard::new(&review(9, None, None), now());
        assert_eq!(no_dish.caption, "Global Bites");
        assert_eq!(no_dish.emoji, "🍽️");
    }

    #[test]
    fn test_time_ago() {
        let now = now();
        assert_eq!(time_ago(now, now), "Just now");
        assert_eq!(time_ago(now - Duration::seconds(59), now), "Just now");
        assert_eq!(time_ago(now - Duration::seconds(60), now), "1m ago");
        assert_eq!(time_ago(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(time_ago(now - Duration::hours(23), now), "23h ago");
        assert_eq!(time_ago(now - Duration::days(3), now), "3d ago");
        assert_eq!(time_ago(now + Duration::hours(1), now), "Just now");
    }

    #[test]
    fn test_rating_stars() {
        assert_eq!(rating_stars(3), "⭐⭐⭐☆☆");
        assert_eq!(rating_stars(0), "☆☆☆☆☆");
        assert_eq!(rating_stars(9), "⭐⭐⭐⭐⭐");
    }

    #[test]
    fn test_post_detail() {
        let wall = FoodWall::load(&MemoryStore::new(), now());
        let detail = wall.post_detail(PostId::new(3)).unwrap();
        assert!(detail.starts_with("Post by David L.:\n\n"));
        assert_eq!(wall.post_detail(PostId::new(99)), None);
    }
}
