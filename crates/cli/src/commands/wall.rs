//! Food wall commands.

use chrono::Utc;
use global_bites_core::PostId;
use global_bites_storefront::AppError;
use global_bites_storefront::error::Result;
use global_bites_storefront::pages::{FoodWall, WallFilter, WallView};
use tracing::info;

use super::Session;

/// Show the wall, a search over it, or one post.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if `detail` names no post.
pub fn browse(
    session: &Session,
    filter: &str,
    search: Option<&str>,
    detail: Option<u32>,
) -> Result<()> {
    let now = Utc::now();
    let mut wall = FoodWall::load(session.cart.store(), now);
    wall.set_filter(WallFilter::from_name(filter));

    if let Some(id) = detail {
        let text = wall
            .post_detail(PostId::new(id))
            .ok_or_else(|| AppError::NotFound(format!("Post {id}")))?;
        info!("{text}");
        return Ok(());
    }

    let view = match search {
        Some(query) => wall.search_view(query, now),
        None => wall.view(now),
    };
    render(&view);
    Ok(())
}

fn render(view: &WallView) {
    if let Some(empty) = view.empty_state {
        info!("{}: {}", empty.title, empty.hint);
        return;
    }

    for card in &view.cards {
        let badge = if card.is_chef { " [Chef]" } else { "" };
        info!(
            "{} {} | {} {}{} | {} | {}",
            card.emoji,
            card.caption,
            card.avatar,
            card.user,
            badge,
            card.stars.as_deref().unwrap_or(""),
            card.time_ago
        );
        info!("    {} ({} likes, {} comments)", card.snippet, card.likes, card.comments);
    }
}
