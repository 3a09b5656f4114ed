//! Case-insensitive substring search.
//!
//! A contact matches when the query occurs in its name, any phone, any email,
//! its address or its birthday (`DD.MM.YYYY`). A note matches on its text or
//! any tag. Results keep store order; there is no ranking. A blank query
//! matches nothing.

use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Contact, Note};
use crate::store::RecordStore;

fn normalize(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

pub fn matching_contacts(records: &RecordStore, query: &str) -> Vec<Contact> {
    let Some(needle) = normalize(query) else {
        return Vec::new();
    };
    records
        .contacts()
        .iter()
        .filter(|c| {
            c.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

pub fn matching_notes(records: &RecordStore, query: &str) -> Vec<Note> {
    let Some(needle) = normalize(query) else {
        return Vec::new();
    };
    records
        .notes()
        .iter()
        .filter(|n| {
            n.search_fields()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// `search <query>`: contacts and notes.
pub fn run(records: &RecordStore, query: &str) -> Result<CmdResult> {
    let contacts = matching_contacts(records, query);
    let notes = matching_notes(records, query);

    let message = if contacts.is_empty() && notes.is_empty() {
        CmdMessage::info(format!("Nothing matches '{}'", query.trim()))
    } else {
        CmdMessage::info(format!(
            "Found {} and {}",
            plural(contacts.len(), "contact"),
            plural(notes.len(), "note")
        ))
    };

    Ok(CmdResult::default()
        .with_contacts(contacts)
        .with_notes(notes)
        .with_message(message))
}

/// `search-note <query>`: notes only.
pub fn notes(records: &RecordStore, query: &str) -> Result<CmdResult> {
    let notes = matching_notes(records, query);
    let message = if notes.is_empty() {
        CmdMessage::info(format!("No notes match '{}'", query.trim()))
    } else {
        CmdMessage::info(format!("Found {}", plural(notes.len(), "note")))
    };
    Ok(CmdResult::default()
        .with_notes(notes)
        .with_message(message))
}
