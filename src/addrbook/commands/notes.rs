//! Note commands: `add-note`, `change-note`, `delete-note`, `all-notes`.

use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::RecordStore;
use crate::validation;

pub fn add(records: &mut RecordStore, text: &str) -> Result<CmdResult> {
    let text = validation::validate_note_text(text)?;
    let note = records.add_note(text).clone();
    Ok(CmdResult::modified()
        .with_message(CmdMessage::success(format!("Note {} added", note.id)))
        .with_notes(vec![note]))
}

/// Replaces the text of an existing note. Tags and id are kept.
pub fn change(records: &mut RecordStore, id: &str, text: &str) -> Result<CmdResult> {
    let id = validation::parse_note_id(id)?;
    let text = validation::validate_note_text(text)?;
    let note = records.note_mut(id)?;
    note.text = text;
    let note = note.clone();
    Ok(CmdResult::modified()
        .with_message(CmdMessage::success(format!("Note {} updated", id)))
        .with_notes(vec![note]))
}

pub fn delete(records: &mut RecordStore, id: &str) -> Result<CmdResult> {
    let id = validation::parse_note_id(id)?;
    let note = records.remove_note(id)?;
    Ok(CmdResult::modified()
        .with_message(CmdMessage::success(format!("Note {} deleted", id)))
        .with_notes(vec![note]))
}

/// `all-notes [--by-tag]`. By default notes come in id order; `by_tag` sorts
/// them by their tag lists, untagged notes last.
pub fn list(records: &RecordStore, by_tag: bool) -> Result<CmdResult> {
    let mut notes: Vec<Note> = records.notes().to_vec();
    if by_tag {
        notes.sort_by(|a, b| {
            a.tags
                .is_empty()
                .cmp(&b.tags.is_empty())
                .then_with(|| a.tags.iter().cmp(b.tags.iter()))
                .then_with(|| a.id.cmp(&b.id))
        });
    }

    let message = if notes.is_empty() {
        CmdMessage::info("No notes.")
    } else {
        CmdMessage::info(plural(notes.len(), "note"))
    };
    Ok(CmdResult::default()
        .with_notes(notes)
        .with_message(message))
}
