//! Note tagging commands.
//!
//! - `add_tags`: add one or more tags to a note
//! - `remove_tag`: remove a tag from a note

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use crate::store::RecordStore;
use crate::validation::{self, FieldError};

/// Add tags to a note.
///
/// All tags are validated before the note is touched. Adding a tag the note
/// already has is a no-op.
pub fn add_tags(records: &mut RecordStore, id: &str, tags: &[String]) -> Result<CmdResult> {
    let id = validation::parse_note_id(id)?;
    if tags.is_empty() {
        return Err(BookError::Usage("add-tag <note_id> <tag> [tag...]".to_string()));
    }
    let tags = tags
        .iter()
        .map(|t| validation::validate_tag_name(t).map_err(FieldError::from))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let note = records.note_mut(id)?;
    let added: Vec<String> = tags
        .into_iter()
        .filter(|tag| note.tags.insert(tag.clone()))
        .collect();
    let note = note.clone();

    if added.is_empty() {
        return Ok(CmdResult::default()
            .with_notes(vec![note])
            .with_message(CmdMessage::info(format!(
                "Note {} already has these tags",
                id
            ))));
    }

    Ok(CmdResult::modified()
        .with_notes(vec![note])
        .with_message(CmdMessage::success(format!(
            "Added tag{} [{}] to note {}",
            if added.len() == 1 { "" } else { "s" },
            added.join(", "),
            id
        ))))
}

/// Remove a tag from a note. A tag the note does not carry is reported as
/// not found.
pub fn remove_tag(records: &mut RecordStore, id: &str, tag: &str) -> Result<CmdResult> {
    let id = validation::parse_note_id(id)?;
    let tag = tag.trim().to_lowercase();
    let note = records.note_mut(id)?;
    if !note.tags.remove(&tag) {
        return Err(BookError::NotFound(format!(
            "Tag '{}' not found on note {}",
            tag, id
        )));
    }
    let note = note.clone();
    Ok(CmdResult::modified()
        .with_notes(vec![note])
        .with_message(CmdMessage::success(format!(
            "Removed tag [{}] from note {}",
            tag, id
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::notes;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn setup() -> RecordStore {
        let mut records = RecordStore::new();
        notes::add(&mut records, "Plan the trip").unwrap();
        records
    }

    #[test]
    fn adds_multiple_tags_normalized() {
        let mut records = setup();
        add_tags(&mut records, "1", &tags(&["Travel", "summer"])).unwrap();
        let note = records.note(1).unwrap();
        let stored: Vec<&str> = note.tags.iter().map(String::as_str).collect();
        assert_eq!(stored, vec!["summer", "travel"]);
    }

    #[test]
    fn duplicate_tag_is_idempotent() {
        let mut records = setup();
        add_tags(&mut records, "1", &tags(&["travel"])).unwrap();
        let result = add_tags(&mut records, "1", &tags(&["travel"])).unwrap();

        assert!(!result.modified);
        assert_eq!(records.note(1).unwrap().tags.len(), 1);
    }

    #[test]
    fn invalid_tag_rejects_whole_request() {
        let mut records = setup();
        let err = add_tags(&mut records, "1", &tags(&["ok", "9bad"])).unwrap_err();
        assert!(matches!(err, BookError::InvalidFormat(FieldError::Tag(_))));
        assert!(records.note(1).unwrap().tags.is_empty());
    }

    #[test]
    fn tagging_missing_note_is_not_found() {
        let mut records = setup();
        let err = add_tags(&mut records, "7", &tags(&["x"])).unwrap_err();
        assert!(matches!(err, BookError::NotFound(_)));
    }

    #[test]
    fn remove_tag_and_report_missing_tag() {
        let mut records = setup();
        add_tags(&mut records, "1", &tags(&["travel"])).unwrap();

        remove_tag(&mut records, "1", "TRAVEL").unwrap();
        assert!(records.note(1).unwrap().tags.is_empty());

        let err = remove_tag(&mut records, "1", "travel").unwrap_err();
        assert_eq!(err.to_string(), "Tag 'travel' not found on note 1");
    }
}
