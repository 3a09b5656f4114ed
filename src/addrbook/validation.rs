//! Field validators.
//!
//! Every value that ends up in a [`Contact`](crate::model::Contact) or a
//! [`Note`](crate::model::Note) passes through one of these functions first.
//! Each returns the normalized value, or a [`FieldError`] describing what was
//! wrong with the input. None of them touch the record store.
//!
//! Rules:
//! - Phone: exactly [`PHONE_DIGITS`] digits once `-`, `(`, `)`, `.` and spaces
//!   are stripped
//! - Email: `local@domain.tld`
//! - Birthday: `DD.MM.YYYY`, any parseable calendar date (future dates too)
//! - Address: free text, at most [`MAX_ADDRESS_LEN`] characters
//! - Tag: see [`validate_tag_name`]

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const PHONE_DIGITS: usize = 10;
pub const MAX_ADDRESS_LEN: usize = 200;
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$").expect("valid email pattern")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("phone '{0}' must contain exactly 10 digits")]
    Phone(String),

    #[error("email '{0}' must look like name@example.com")]
    Email(String),

    #[error("date '{0}' must use the DD.MM.YYYY format")]
    Date(String),

    #[error("address {0}")]
    Address(&'static str),

    #[error("contact name {0}")]
    Name(&'static str),

    #[error("note text cannot be empty")]
    EmptyText,

    #[error("{0} cannot be empty")]
    Blank(&'static str),

    #[error("{0}")]
    Tag(#[from] TagValidationError),

    #[error("'{0}' is not a valid note id")]
    NoteId(String),

    #[error("'{0}' is not a valid number of days")]
    Days(String),
}

/// Normalizes a phone number to its bare digits.
pub fn validate_phone(input: &str) -> Result<String, FieldError> {
    let digits: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '(' | ')' | '.' | ' '))
        .collect();

    if digits.len() != PHONE_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::Phone(input.trim().to_string()));
    }
    Ok(digits)
}

pub fn validate_email(input: &str) -> Result<String, FieldError> {
    let email = input.trim();
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::Email(email.to_string()));
    }
    Ok(email.to_string())
}

pub fn parse_date(input: &str) -> Result<NaiveDate, FieldError> {
    let raw = input.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| FieldError::Date(raw.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn validate_address(input: &str) -> Result<String, FieldError> {
    let address = input.trim();
    if address.is_empty() {
        return Err(FieldError::Address("cannot be empty"));
    }
    if address.chars().count() > MAX_ADDRESS_LEN {
        return Err(FieldError::Address("is longer than 200 characters"));
    }
    if address.chars().any(char::is_control) {
        return Err(FieldError::Address("contains control characters"));
    }
    Ok(address.to_string())
}

/// Contact names are the store key, so they are single tokens of printable text.
pub fn validate_name(input: &str) -> Result<String, FieldError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(FieldError::Name("cannot be empty"));
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(FieldError::Name("cannot contain spaces"));
    }
    Ok(name.to_string())
}

pub fn validate_note_text(input: &str) -> Result<String, FieldError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(FieldError::EmptyText);
    }
    Ok(text.to_string())
}

pub fn parse_note_id(input: &str) -> Result<u64, FieldError> {
    input
        .trim()
        .parse::<u64>()
        .map_err(|_| FieldError::NoteId(input.trim().to_string()))
}

pub fn parse_days(input: &str) -> Result<u32, FieldError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| FieldError::Days(input.trim().to_string()))
}

/// Validates a tag and returns it lowercased.
///
/// Tags start with a letter and continue with letters, digits, `_` or `-`.
/// Consecutive hyphens and a trailing hyphen are rejected.
pub fn validate_tag_name(input: &str) -> Result<String, TagValidationError> {
    let name = input.trim();
    let first_char = name.chars().next().ok_or(TagValidationError::Empty)?;
    if !first_char.is_alphabetic() {
        return Err(TagValidationError::InvalidStart(first_char));
    }
    if name.ends_with('-') {
        return Err(TagValidationError::EndsWithHyphen);
    }

    let mut prev_was_hyphen = false;
    for ch in name.chars() {
        if !(ch.is_alphanumeric() || ch == '_' || ch == '-') {
            return Err(TagValidationError::InvalidCharacter(ch));
        }
        if ch == '-' && prev_was_hyphen {
            return Err(TagValidationError::ConsecutiveHyphens);
        }
        prev_was_hyphen = ch == '-';
    }

    Ok(name.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    Empty,
    InvalidStart(char),
    EndsWithHyphen,
    ConsecutiveHyphens,
    InvalidCharacter(char),
}

impl std::fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValidationError::Empty => write!(f, "tag cannot be empty"),
            TagValidationError::InvalidStart(ch) => {
                write!(f, "tag must start with a letter, found '{}'", ch)
            }
            TagValidationError::EndsWithHyphen => write!(f, "tag cannot end with a hyphen"),
            TagValidationError::ConsecutiveHyphens => {
                write!(f, "tag cannot contain consecutive hyphens")
            }
            TagValidationError::InvalidCharacter(ch) => write!(
                f,
                "tag contains invalid character '{}' (letters, digits, '_' and '-' only)",
                ch
            ),
        }
    }
}

impl std::error::Error for TagValidationError {}
