//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every addrbook operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the in-memory [`RecordStore`] and the [`DataStore`] it came from
//! - **Dispatches** to the appropriate command function
//! - **Persists** after mutating commands when autosave is on, and on request
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no parsing of command lines and no printing.
//!
//! ## Generic Over DataStore
//!
//! `AddressBookApi<S: DataStore>` is generic over the storage backend:
//! - Production: `AddressBookApi<FileStore>`
//! - Testing: `AddressBookApi<InMemoryStore>`

use crate::commands;
use crate::config::BookConfig;
use crate::error::Result;
use crate::model::Contact;
use crate::store::{DataStore, RecordStore};
use crate::validation;
use chrono::{Local, NaiveDate};
use log::{debug, info};

pub struct AddressBookApi<S: DataStore> {
    store: S,
    records: RecordStore,
    autosave: bool,
    birthday_window: u32,
    today: Option<NaiveDate>,
    dirty: bool,
}

impl<S: DataStore> AddressBookApi<S> {
    /// Loads the records from `store`. A load failure is returned as is; the
    /// caller decides whether to abort.
    pub fn open(store: S, config: &BookConfig) -> Result<Self> {
        let records = store.load()?;
        info!(
            "Opened address book at {} ({} contacts, {} notes)",
            store.describe(),
            records.contacts().len(),
            records.notes().len()
        );
        Ok(Self {
            store,
            records,
            autosave: config.autosave,
            birthday_window: config.birthday_window,
            today: None,
            dirty: false,
        })
    }

    /// Pins "today" for birthday calculations.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes the full record store to the backend.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.records)?;
        self.dirty = false;
        debug!("Saved address book to {}", self.store.describe());
        Ok(())
    }

    fn commit(&mut self, result: commands::CmdResult) -> Result<commands::CmdResult> {
        if result.modified {
            debug!(
                "Records changed ({} contacts, {} notes)",
                self.records.contacts().len(),
                self.records.notes().len()
            );
            self.dirty = true;
            if self.autosave {
                self.save()?;
            }
        }
        Ok(result)
    }

    pub fn check_new_name(&self, name: &str) -> Result<String> {
        commands::add::check_new_name(&self.records, name)
    }

    pub fn add_contact(&mut self, contact: Contact) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.records, contact)?;
        self.commit(result)
    }

    pub fn add_contact_with_phone(
        &mut self,
        name: &str,
        phone: &str,
    ) -> Result<commands::CmdResult> {
        let result = commands::add::with_phone(&mut self.records, name, phone)?;
        self.commit(result)
    }

    pub fn change_contact(
        &mut self,
        name: &str,
        field: &str,
        values: &[String],
    ) -> Result<commands::CmdResult> {
        let request = commands::change::ChangeRequest::parse(field, values)?;
        let result = commands::change::run(&mut self.records, name, request)?;
        self.commit(result)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.records, name)?;
        self.commit(result)
    }

    pub fn phones(&self, name: &str) -> Result<commands::CmdResult> {
        commands::view::phones(&self.records, name)
    }

    pub fn all_contacts(&self) -> Result<commands::CmdResult> {
        commands::view::all(&self.records)
    }

    pub fn show_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::view::birthday(&self.records, name)
    }

    /// Upcoming birthdays; `days` falls back to the configured window.
    pub fn birthdays(&self, days: Option<&str>) -> Result<commands::CmdResult> {
        let days = match days {
            Some(raw) => validation::parse_days(raw)?,
            None => self.birthday_window,
        };
        commands::birthdays::run(&self.records, self.today(), days)
    }

    pub fn search(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.records, query)
    }

    pub fn add_note(&mut self, text: &str) -> Result<commands::CmdResult> {
        let result = commands::notes::add(&mut self.records, text)?;
        self.commit(result)
    }

    pub fn all_notes(&self, by_tag: bool) -> Result<commands::CmdResult> {
        commands::notes::list(&self.records, by_tag)
    }

    pub fn search_notes(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::notes(&self.records, query)
    }

    pub fn change_note(&mut self, id: &str, text: &str) -> Result<commands::CmdResult> {
        let result = commands::notes::change(&mut self.records, id, text)?;
        self.commit(result)
    }

    pub fn delete_note(&mut self, id: &str) -> Result<commands::CmdResult> {
        let result = commands::notes::delete(&mut self.records, id)?;
        self.commit(result)
    }

    pub fn add_tags(&mut self, id: &str, tags: &[String]) -> Result<commands::CmdResult> {
        let result = commands::tagging::add_tags(&mut self.records, id, tags)?;
        self.commit(result)
    }

    pub fn delete_tag(&mut self, id: &str, tag: &str) -> Result<commands::CmdResult> {
        let result = commands::tagging::remove_tag(&mut self.records, id, tag)?;
        self.commit(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, UpcomingBirthday};
