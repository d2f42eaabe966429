//! Contact email addresses.

use core::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// Why a string was rejected as an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email address is required")]
    Empty,

    #[error("email address is longer than {max} characters")]
    TooLong { max: usize },

    #[error("email address has no '@'")]
    MissingAtSymbol,

    #[error("email address should look like name@example.com")]
    Malformed,
}

/// A visitor's email address from the contact form.
///
/// Surrounding whitespace is trimmed before checking; whitespace inside the
/// address is rejected. The domain must contain a dot.
///
/// ```
/// use global_bites_core::Email;
///
/// let email = Email::parse("  hungry@globalbites.com ").unwrap();
/// assert_eq!(email.as_str(), "hungry@globalbites.com");
///
/// assert!(Email::parse("chef@kitchen").is_err());
/// assert!(Email::parse("table for two@globalbites.com").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Longest address accepted, per RFC 5321.
    pub const MAX_LENGTH: usize = 254;

    /// Check and wrap an address.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] describing the first problem found.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let address = input.trim();
        match address {
            "" => Err(EmailError::Empty),
            a if a.len() > Self::MAX_LENGTH => Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            }),
            a if !a.contains('@') => Err(EmailError::MissingAtSymbol),
            a if !EMAIL_PATTERN.is_match(a) => Err(EmailError::Malformed),
            a => Ok(Self(a.to_owned())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
