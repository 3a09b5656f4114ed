use crate::error::{BookError, Result};
use crate::model::{Contact, Note};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// All contacts and notes of one address book.
///
/// Contacts keep insertion order and are keyed by name. Notes are kept sorted
/// by id; ids come from a counter that only moves forward, so a deleted note's
/// id is never handed out again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoreFile")]
pub struct RecordStore {
    next_note_id: u64,
    contacts: Vec<Contact>,
    notes: Vec<Note>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self {
            next_note_id: 1,
            contacts: Vec::new(),
            notes: Vec::new(),
        }
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn find_contact(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name == name)
    }

    pub fn contact(&self, name: &str) -> Result<&Contact> {
        self.find_contact(name)
            .ok_or_else(|| BookError::contact_not_found(name))
    }

    pub fn contact_mut(&mut self, name: &str) -> Result<&mut Contact> {
        self.contacts
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| BookError::contact_not_found(name))
    }

    pub fn insert_contact(&mut self, contact: Contact) -> Result<()> {
        if self.find_contact(&contact.name).is_some() {
            return Err(BookError::DuplicateName(contact.name));
        }
        self.contacts.push(contact);
        Ok(())
    }

    pub fn remove_contact(&mut self, name: &str) -> Result<Contact> {
        let pos = self
            .contacts
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| BookError::contact_not_found(name))?;
        Ok(self.contacts.remove(pos))
    }

    /// Renames in place, so the contact keeps its position.
    pub fn rename_contact(&mut self, name: &str, new_name: String) -> Result<()> {
        if name != new_name && self.find_contact(&new_name).is_some() {
            return Err(BookError::DuplicateName(new_name));
        }
        self.contact_mut(name)?.name = new_name;
        Ok(())
    }

    pub fn add_note(&mut self, text: String) -> &Note {
        let id = self.next_note_id;
        self.next_note_id += 1;
        self.notes.push(Note::new(id, text));
        &self.notes[self.notes.len() - 1]
    }

    pub fn note(&self, id: u64) -> Result<&Note> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| BookError::note_not_found(id))
    }

    pub fn note_mut(&mut self, id: u64) -> Result<&mut Note> {
        self.notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| BookError::note_not_found(id))
    }

    pub fn remove_note(&mut self, id: u64) -> Result<Note> {
        let pos = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| BookError::note_not_found(id))?;
        Ok(self.notes.remove(pos))
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty() && self.notes.is_empty()
    }
}

/// On-disk shape of a [`RecordStore`], checked before it is accepted.
#[derive(Deserialize)]
struct StoreFile {
    #[serde(default)]
    next_note_id: u64,
    #[serde(default)]
    contacts: Vec<Contact>,
    #[serde(default)]
    notes: Vec<Note>,
}

impl TryFrom<StoreFile> for RecordStore {
    type Error = String;

    fn try_from(file: StoreFile) -> std::result::Result<Self, Self::Error> {
        let mut names = HashSet::new();
        for contact in &file.contacts {
            if !names.insert(contact.name.as_str()) {
                return Err(format!("duplicate contact name '{}'", contact.name));
            }
        }

        let mut notes = file.notes;
        notes.sort_by_key(|n| n.id);
        if let Some(pair) = notes.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(format!("duplicate note id {}", pair[0].id));
        }

        let max_id = notes.last().map(|n| n.id).unwrap_or(0);
        Ok(RecordStore {
            next_note_id: file.next_note_id.max(max_id + 1),
            contacts: file.contacts,
            notes,
        })
    }
}
