//! Core record types.
//!
//! Field values are newtypes that can only be built through the validators in
//! [`crate::validation`], including when they are read back from disk, so a
//! `Contact` in memory always holds well-formed phones, emails and dates.

use crate::validation::{self, FieldError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        validation::validate_phone(input).map(Phone)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        validation::validate_email(input).map(Email)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        validation::validate_address(input).map(Address)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A birth date, stored on disk as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        validation::parse_date(input).map(Birthday)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Birthday(date)
    }
}

macro_rules! string_field {
    ($ty:ident) => {
        impl TryFrom<String> for $ty {
            type Error = FieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $ty::parse(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.to_string()
            }
        }
    };
}

string_field!(Phone);
string_field!(Email);
string_field!(Address);
string_field!(Birthday);

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&validation::format_date(self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
}

impl Contact {
    pub fn new(name: &str) -> Result<Self, FieldError> {
        Ok(Self {
            name: validation::validate_name(name)?,
            phones: Vec::new(),
            emails: Vec::new(),
            address: None,
            birthday: None,
        })
    }

    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.contains(phone)
    }

    pub fn has_email(&self, email: &Email) -> bool {
        self.emails.contains(email)
    }

    /// Appends unless the number is already listed. Returns whether it was added.
    pub fn add_phone(&mut self, phone: Phone) -> bool {
        if self.has_phone(&phone) {
            return false;
        }
        self.phones.push(phone);
        true
    }

    pub fn add_email(&mut self, email: Email) -> bool {
        if self.has_email(&email) {
            return false;
        }
        self.emails.push(email);
        true
    }

    /// Every searchable field rendered as text.
    pub fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.name.clone()];
        fields.extend(self.phones.iter().map(ToString::to_string));
        fields.extend(self.emails.iter().map(ToString::to_string));
        if let Some(address) = &self.address {
            fields.push(address.to_string());
        }
        if let Some(birthday) = &self.birthday {
            fields.push(birthday.to_string());
        }
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub text: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Note {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            text,
            tags: BTreeSet::new(),
        }
    }

    pub fn search_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.text.as_str()).chain(self.tags.iter().map(String::as_str))
    }
}
