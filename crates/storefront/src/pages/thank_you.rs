//! Order confirmation page shown after checkout.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use global_bites_core::store::keys;
use global_bites_core::{KeyValueStore, Price, format_usd};
use rand::Rng;
use thiserror::Error;
use tracing::instrument;

const ORDER_NUMBER_MIN: u32 = 100_000;
const ORDER_NUMBER_MAX: u32 = 999_999;

/// Minimum delivery estimate, in minutes.
const BASE_DELIVERY_MINUTES: i64 = 35;
/// Extra minutes added at random, inclusive.
const DELIVERY_SPREAD_MINUTES: i64 = 15;

const SHARE_MESSAGE: &str =
    "I just ordered delicious global cuisine from Global Bites! 🌍🍽️ Can't wait to taste the world!";

const INSTAGRAM_MESSAGE: &str = "Share your Global Bites experience on Instagram! 📷\n\nTag us: @GlobalBites\nUse hashtag: #TasteTheWorld";

/// A social network offered on the share buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Facebook,
    Twitter,
    Instagram,
}

impl fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Facebook => write!(f, "facebook"),
            Self::Twitter => write!(f, "twitter"),
            Self::Instagram => write!(f, "instagram"),
        }
    }
}

/// Share button with an unrecognized `data-platform`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown share platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for ShareTarget {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "facebook" => Ok(Self::Facebook),
            "twitter" => Ok(Self::Twitter),
            "instagram" => Ok(Self::Instagram),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}

/// What the host does when a share button is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Open the network's share dialog in a popup.
    OpenUrl(String),
    /// Show the visitor a message instead.
    ShowMessage(String),
}

/// The confirmation page for a just-placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThankYouPage {
    order_number: u32,
    delivery_at: NaiveDateTime,
    total: Option<Price>,
}

impl ThankYouPage {
    /// Build the page: draw an order number and delivery estimate, and read
    /// the total stashed at checkout.
    ///
    /// A missing or unreadable total leaves the total blank.
    #[instrument(skip_all)]
    pub fn load<Tz: TimeZone>(
        store: &impl KeyValueStore,
        now: &DateTime<Tz>,
        rng: &mut impl Rng,
    ) -> Self {
        let order_number = rng.random_range(ORDER_NUMBER_MIN..=ORDER_NUMBER_MAX);
        let minutes = BASE_DELIVERY_MINUTES + rng.random_range(0..=DELIVERY_SPREAD_MINUTES);
        let delivery_at = now.naive_local() + Duration::minutes(minutes);

        let total = match store.get(keys::LAST_ORDER_TOTAL) {
            Ok(raw) => raw.and_then(|raw| match Price::parse(&raw) {
                Ok(total) => Some(total),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored order total is unreadable");
                    None
                }
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored order total");
                None
            }
        };

        tracing::info!(order_number, minutes, "Order confirmation shown");
        Self {
            order_number,
            delivery_at,
            total,
        }
    }

    #[must_use]
    pub const fn order_number(&self) -> u32 {
        self.order_number
    }

    /// "#GB482913"
    #[must_use]
    pub fn order_label(&self) -> String {
        format!("#GB{}", self.order_number)
    }

    /// Estimated delivery in local time, e.g. "~07:05 PM".
    #[must_use]
    pub fn delivery_label(&self) -> String {
        format!("~{}", self.delivery_at.format("%I:%M %p"))
    }

    #[must_use]
    pub const fn total(&self) -> Option<Price> {
        self.total
    }

    /// Formatted order total, when one was stashed.
    #[must_use]
    pub fn total_label(&self) -> Option<String> {
        self.total.map(|total| format_usd(total.amount()))
    }
}

/// Share the order on a social network.
///
/// `origin` is the site origin linked from the post.
#[must_use]
pub fn share(target: ShareTarget, origin: &str) -> ShareAction {
    let message = urlencoding::encode(SHARE_MESSAGE);
    let url = urlencoding::encode(origin);

    match target {
        ShareTarget::Facebook => ShareAction::OpenUrl(format!(
            "https://www.facebook.com/sharer/sharer.php?u={url}&quote={message}"
        )),
        ShareTarget::Twitter => ShareAction::OpenUrl(format!(
            "https://twitter.com/intent/tweet?text={message}&url={url}"
        )),
        ShareTarget::Instagram => ShareAction::ShowMessage(INSTAGRAM_MESSAGE.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{FixedOffset, NaiveTime, Utc};
    use global_bites_core::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn evening() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 3, 14, 18, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_order_number_range() {
        let store = MemoryStore::new();
        for seed in 0..200 {
            let page = ThankYouPage::load(&store, &evening(), &mut StdRng::seed_from_u64(seed));
            assert!((100_000..=999_999).contains(&page.order_number()));
            assert_eq!(page.order_label(), format!("#GB{}", page.order_number()));
        }
    }

    #[test]
    fn test_delivery_window() {
        let store = MemoryStore::new();
        let earliest = NaiveTime::from_hms_opt(19, 5, 0).unwrap();
        let latest = NaiveTime::from_hms_opt(19, 20, 0).unwrap();

        for seed in 0..200 {
            let page = ThankYouPage::load(&store, &evening(), &mut StdRng::seed_from_u64(seed));
            let eta = page.delivery_at.time();
            assert!(eta >= earliest && eta <= latest, "{eta}");
            assert!(page.delivery_label().starts_with("~07:"));
            assert!(page.delivery_label().ends_with(" PM"));
        }
    }

    #[test]
    fn test_delivery_uses_local_clock() {
        let store = MemoryStore::new();
        let page = ThankYouPage::load(&store, &Utc::now(), &mut StdRng::seed_from_u64(1));
        assert_eq!(page.delivery_label().len(), "~12:00 AM".len());
    }

    #[test]
    fn test_total_read_from_checkout() {
        let mut store = MemoryStore::new();
        store.set(keys::LAST_ORDER_TOTAL, "30.99").unwrap();

        let page = ThankYouPage::load(&store, &evening(), &mut StdRng::seed_from_u64(7));
        assert_eq!(page.total_label().as_deref(), Some("$30.99"));
    }

    #[test]
    fn test_total_missing_or_garbled() {
        let mut store = MemoryStore::new();
        let page = ThankYouPage::load(&store, &evening(), &mut StdRng::seed_from_u64(7));
        assert_eq!(page.total(), None);

        store.set(keys::LAST_ORDER_TOTAL, "thirty").unwrap();
        let page = ThankYouPage::load(&store, &evening(), &mut StdRng::seed_from_u64(7));
        assert_eq!(page.total_label(), None);
    }

    #[test]
    fn test_share_targets() {
        let origin = "https://globalbites.example";

        let ShareAction::OpenUrl(facebook) = share(ShareTarget::Facebook, origin) else {
            panic!("facebook should open a url");
        };
        assert!(facebook.starts_with(
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fglobalbites.example&quote=I%20just%20ordered"
        ));

        let ShareAction::OpenUrl(twitter) = share(ShareTarget::Twitter, origin) else {
            panic!("twitter should open a url");
        };
        assert!(twitter.starts_with("https://twitter.com/intent/tweet?text=I%20just%20ordered"));
        assert!(twitter.ends_with("&url=https%3A%2F%2Fglobalbites.example"));

        let ShareAction::ShowMessage(message) = share(ShareTarget::Instagram, origin) else {
            panic!("instagram should show a message");
        };
        assert!(message.contains("@GlobalBites"));
        assert!(message.contains("#TasteTheWorld"));
    }

    #[test]
    fn test_share_target_names() {
        assert_eq!("Twitter".parse::<ShareTarget>().unwrap(), ShareTarget::Twitter);
        assert_eq!(ShareTarget::Instagram.to_string(), "instagram");
        assert!("myspace".parse::<ShareTarget>().is_err());
    }
}
