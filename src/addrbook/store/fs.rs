use super::{DataStore, RecordStore};
use crate::error::{BookError, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Stores the record store as pretty-printed JSON in a single file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookError::Io)?;
            }
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<RecordStore> {
        if !self.path.exists() {
            info!("No data file at {}, starting empty", self.path.display());
            return Ok(RecordStore::new());
        }

        let content = fs::read_to_string(&self.path).map_err(BookError::Io)?;
        if content.trim().is_empty() {
            return Ok(RecordStore::new());
        }
        let records: RecordStore =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        debug!(
            "Loaded {} contacts and {} notes from {}",
            records.contacts().len(),
            records.notes().len(),
            self.path.display()
        );
        Ok(records)
    }

    fn save(&mut self, records: &RecordStore) -> Result<()> {
        self.ensure_parent()?;

        let content = serde_json::to_string_pretty(records).map_err(BookError::Serialization)?;
        let tmp = self.temp_path();
        fs::write(&tmp, content).map_err(BookError::Io)?;
        fs::rename(&tmp, &self.path).map_err(BookError::Io)?;

        debug!(
            "Saved {} contacts and {} notes to {}",
            records.contacts().len(),
            records.notes().len(),
            self.path.display()
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Birthday, Contact, Email, Phone};

    fn sample_records() -> RecordStore {
        let mut records = RecordStore::new();
        let mut ann = Contact::new("Ann").unwrap();
        ann.add_phone(Phone::parse("0501234567").unwrap());
        ann.add_email(Email::parse("ann@mail.com").unwrap());
        ann.birthday = Some(Birthday::parse("29.02.2000").unwrap());
        records.insert_contact(ann).unwrap();
        records.insert_contact(Contact::new("Bob").unwrap()).unwrap();

        records.add_note("Buy milk".into());
        let id = records.add_note("Call Ann".into()).id;
        records.note_mut(id).unwrap().tags.insert("calls".into());
        records
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nothing.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/book.json"));
        let records = sample_records();

        store.save(&records).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, records);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn corrupt_file_is_a_fatal_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, BookError::Serialization(_)));
        assert!(err.is_fatal());
    }
}
