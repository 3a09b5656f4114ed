//! Business logic for every user-facing operation.
//!
//! Each command takes the [`RecordStore`](crate::store::RecordStore) (and
//! whatever typed inputs it needs), applies its change or runs its query, and
//! returns a [`CmdResult`]. Commands never print and never persist; the API
//! layer decides whether a result needs saving by looking at
//! [`CmdResult::modified`].

use crate::config::BookConfig;
use crate::model::{Contact, Note};

pub mod add;
pub mod birthdays;
pub mod change;
pub mod config;
pub mod delete;
pub mod notes;
pub mod search;
pub mod tagging;
pub mod view;

pub use birthdays::UpcomingBirthday;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub contacts: Vec<Contact>,
    pub notes: Vec<Note>,
    pub birthdays: Vec<UpcomingBirthday>,
    pub config: Option<BookConfig>,
    pub messages: Vec<CmdMessage>,
    /// Set when the record store changed and should be persisted.
    pub modified: bool,
}

impl CmdResult {
    pub fn modified() -> Self {
        Self {
            modified: true,
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_birthdays(mut self, birthdays: Vec<UpcomingBirthday>) -> Self {
        self.birthdays = birthdays;
        self
    }

    pub fn with_config(mut self, config: BookConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// `1 contact`, `3 notes`.
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
