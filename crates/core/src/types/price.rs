//! Type-safe price representation using decimal arithmetic.
//!
//! Menu prices arrive as text (`data-price="12.99"`) and are stored as JSON
//! numbers. [`Price`] parses the text once, rejects anything that is not a
//! non-negative whole-cent amount up to [`Price::MAX`], and keeps the value
//! as a [`Decimal`] so that totals add up to the cent.
//!
//! The bounds keep every price exact through the JSON number encoding and
//! keep line and cart totals far from `Decimal` overflow.

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy, dec};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("price is not a number: {0}")]
    NotANumber(String),
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
    /// The amount has fractions of a cent.
    #[error("price must be in whole cents")]
    FractionalCents,
    /// The amount is above [`Price::MAX`].
    #[error("price cannot exceed {max}")]
    TooLarge { max: Decimal },
}

/// A non-negative unit price in US dollars.
///
/// ## Examples
///
/// ```
/// use global_bites_core::Price;
///
/// let price = Price::parse("12.99").unwrap();
/// assert_eq!(price.to_string(), "$12.99");
///
/// assert!(Price::parse("").is_err());
/// assert!(Price::parse("twelve").is_err());
/// assert!(Price::parse("-1").is_err());
/// assert!(Price::parse("0.333").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest accepted unit price.
    pub const MAX: Decimal = dec!(100000);

    /// Digits allowed after the decimal point.
    const CENT_DIGITS: u32 = 2;

    /// Create a price from a decimal amount.
    ///
    /// Trailing zeros do not count against the cent limit: `12.990` is `12.99`.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is below zero, has fractions of a cent,
    /// or exceeds [`Price::MAX`].
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        let amount = amount.normalize();
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        if amount.scale() > Self::CENT_DIGITS {
            return Err(PriceError::FractionalCents);
        }
        if amount > Self::MAX {
            return Err(PriceError::TooLarge { max: Self::MAX });
        }
        Ok(Self(amount))
    }

    /// Parse a price from its text form, e.g. `"12.99"`.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, not a decimal number, or negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| PriceError::NotANumber(trimmed.to_owned()))?;

        Self::new(amount)
    }

    /// Get the amount in dollars.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Decimal {
        self.0.saturating_mul(Decimal::from(quantity))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_usd(self.0))
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

// Stored carts keep prices as plain JSON numbers.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

/// Format an amount as US currency, e.g. `$1,234.50`.
///
/// Rounds half away from zero to whole cents.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}.{cents}")
    } else {
        format!("${grouped}.{cents}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_parse_valid_prices() {
        assert_eq!(Price::parse("12.99").unwrap().amount(), dec!(12.99));
        assert_eq!(Price::parse(" 8 ").unwrap().amount(), dec!(8));
        assert_eq!(Price::parse("0").unwrap(), Price::ZERO);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Price::parse("   "), Err(PriceError::Empty));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert!(matches!(
            Price::parse("abc"),
            Err(PriceError::NotANumber(_))
        ));
        assert!(matches!(
            Price::parse("12.99abc"),
            Err(PriceError::NotANumber(_))
        ));
        assert!(matches!(
            Price::parse("NaN"),
            Err(PriceError::NotANumber(_))
        ));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(Price::parse("-0.01"), Err(PriceError::Negative));
    }

    #[test]
    fn test_parse_fractional_cents() {
        assert_eq!(Price::parse("0.333"), Err(PriceError::FractionalCents));
        assert_eq!(
            Price::parse("123456789.123456789"),
            Err(PriceError::FractionalCents)
        );
        assert_eq!(Price::parse("12.990").unwrap().amount(), dec!(12.99));
    }

    #[test]
    fn test_parse_too_large() {
        assert_eq!(Price::parse("100000").unwrap().amount(), Price::MAX);
        assert_eq!(
            Price::parse("100000.01"),
            Err(PriceError::TooLarge { max: Price::MAX })
        );
        assert!(matches!(
            Price::parse("79228162514264337593543950335"),
            Err(PriceError::TooLarge { .. })
        ));
        assert!(matches!(
            Price::parse("5e28"),
            Err(PriceError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_times() {
        let price = Price::parse("3.25").unwrap();
        assert_eq!(price.times(4), dec!(13.00));
        assert_eq!(price.times(0), Decimal::ZERO);

        let most = Price::new(Price::MAX).unwrap();
        assert_eq!(most.times(u32::MAX), Price::MAX * Decimal::from(u32::MAX));
    }

    #[test]
    fn test_serializes_as_json_number() {
        let price = Price::parse("10.99").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "10.99");

        let parsed: Price = serde_json::from_str("10.99").unwrap();
        assert_eq!(parsed, price);
        let whole: Price = serde_json::from_str("10").unwrap();
        assert_eq!(whole.amount(), dec!(10));
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-5").is_err());
    }

    #[test]
    fn test_json_number_keeps_every_accepted_price() {
        for text in ["0.01", "0.1", "13.99", "99999.99", "100000", "4567.8"] {
            let price = Price::parse(text).unwrap();
            let json = serde_json::to_string(&price).unwrap();
            let back: Price = serde_json::from_str(&json).unwrap();
            assert_eq!(back, price, "{text} came back as {json}");
        }
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Price>("0.3333333333333333").is_err());
        assert!(serde_json::from_str::<Price>("1e29").is_err());
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(dec!(0)), "$0.00");
        assert_eq!(format_usd(dec!(3.99)), "$3.99");
        assert_eq!(format_usd(dec!(30.99)), "$30.99");
        assert_eq!(format_usd(dec!(1234.5)), "$1,234.50");
        assert_eq!(format_usd(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_usd(dec!(0.005)), "$0.01");
        assert_eq!(format_usd(dec!(-2.5)), "-$2.50");
    }
}
