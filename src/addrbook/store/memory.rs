use super::{DataStore, RecordStore};
use crate::error::{BookError, Result};

/// Keeps the last save as serialized JSON, so loading goes through the same
/// serde path as [`FileStore`](super::fs::FileStore).
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<RecordStore> {
        match &self.saved {
            Some(json) => serde_json::from_str(json).map_err(BookError::Serialization),
            None => Ok(RecordStore::new()),
        }
    }

    fn save(&mut self, records: &RecordStore) -> Result<()> {
        self.saved = Some(serde_json::to_string(records).map_err(BookError::Serialization)?);
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Contact;

    #[test]
    fn loads_what_was_saved() {
        let mut store = InMemoryStore::new();
        assert!(store.load().unwrap().is_empty());

        let mut records = RecordStore::new();
        records.insert_contact(Contact::new("Ann").unwrap()).unwrap();
        records.add_note("hello".into());
        store.save(&records).unwrap();

        assert_eq!(store.load().unwrap(), records);
        assert_eq!(store.save_count(), 1);
    }
}
