//! Contact form validation and submission.
//!
//! Fields are checked one at a time as the visitor leaves them, and all
//! together on submit. Nothing is sent anywhere; an accepted message is
//! logged and handed back to the caller.

use std::fmt;
use std::sync::LazyLock;

use global_bites_core::{Email, EmailError};
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

/// Optional leading `+`, a non-zero digit, then at most 15 more digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("Invalid regex"));

/// Separators people type in phone numbers.
static PHONE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-()]").expect("Invalid regex"));

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("Invalid regex"));

const MIN_NAME_LENGTH: usize = 2;

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Subject,
        Self::Message,
    ];

    /// Whether the form cannot be sent with this field blank.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Message)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Phone => write!(f, "phone"),
            Self::Subject => write!(f, "subject"),
            Self::Message => write!(f, "message"),
        }
    }
}

/// Validation outcome for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState {
    /// Optional and left blank; neither marked valid nor invalid.
    Empty,
    Valid,
    Invalid(String),
}

impl FieldState {
    /// Whether the field allows the form to be sent.
    #[must_use]
    pub const fn is_acceptable(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }
}

/// Check a single field value.
#[must_use]
pub fn validate_field(field: Field, value: &str) -> FieldState {
    let value = value.trim();
    if value.is_empty() {
        return if field.is_required() {
            FieldState::Invalid(format!("Please enter your {field}."))
        } else {
            FieldState::Empty
        };
    }

    let problem = match field {
        Field::Name => (!is_valid_name(value))
            .then(|| "Name must be at least 2 letters, using letters and spaces only.".to_string()),
        Field::Email => Email::parse(value).err().map(|e| email_message(&e)),
        Field::Phone => {
            (!is_valid_phone(value)).then(|| "Please enter a valid phone number.".to_string())
        }
        Field::Subject | Field::Message => None,
    };

    problem.map_or(FieldState::Valid, FieldState::Invalid)
}

fn email_message(error: &EmailError) -> String {
    match error {
        EmailError::TooLong { max } => format!("Email must be at most {max} characters."),
        _ => "Please enter a valid email address.".to_string(),
    }
}

/// At least two characters, ASCII letters and whitespace only.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_LENGTH && NAME_PATTERN.is_match(name)
}

/// Phone number check, ignoring spaces, dashes and parentheses.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned = PHONE_SEPARATORS.replace_all(phone, "");
    PHONE_PATTERN.is_match(&cleaned)
}

/// Errors from submitting the contact form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// One or more fields failed validation.
    #[error("Please correct the following fields: {}", list_fields(.0))]
    Invalid(Vec<Field>),
}

fn list_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw contact form values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

/// A validated contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// The raw value of a field.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Check every field, in form order.
    #[must_use]
    pub fn validate(&self) -> Vec<(Field, FieldState)> {
        Field::ALL
            .iter()
            .map(|&field| (field, validate_field(field, self.value(field))))
            .collect()
    }

    /// Validate and accept the message.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Invalid`] listing every field that failed.
    #[instrument(skip(self))]
    pub fn submit(&self) -> Result<ContactSubmission, ContactError> {
        let invalid: Vec<Field> = self
            .validate()
            .into_iter()
            .filter(|(_, state)| !state.is_acceptable())
            .map(|(field, _)| field)
            .collect();
        if !invalid.is_empty() {
            return Err(ContactError::Invalid(invalid));
        }

        let email = Email::parse(self.email.trim())
            .map_err(|_| ContactError::Invalid(vec![Field::Email]))?;
        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        let submission = ContactSubmission {
            name: self.name.trim().to_string(),
            email,
            phone: optional(&self.phone),
            subject: optional(&self.subject),
            message: self.message.trim().to_string(),
        };

        tracing::info!(
            email = %submission.email,
            subject = submission.subject.as_deref().unwrap_or(""),
            "Contact form submitted"
        );
        Ok(submission)
    }
}
