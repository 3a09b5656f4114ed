//! # Storage Layer
//!
//! Two pieces live here:
//!
//! - [`RecordStore`]: the in-memory collection of contacts and notes. It owns
//!   every invariant about identity (unique contact names, unique and
//!   never-reused note ids). Commands mutate it directly.
//! - [`DataStore`]: where a `RecordStore` is persisted between sessions.
//!
//! ## Persistence Model
//!
//! The whole record store is read once at startup and written back in full.
//! There is no partial update: each save replaces the previous file. The API
//! layer decides *when* to save (after each mutation with `autosave`, and at
//! exit).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file, written via a temporary sibling
//!   and renamed into place.
//! - [`memory::InMemoryStore`]: keeps the serialized JSON in memory, for
//!   testing logic without filesystem I/O.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "next_note_id": 3,
//!   "contacts": [ { "name": "Ann", "phones": ["0501234567"], ... } ],
//!   "notes": [ { "id": 1, "created_at": "...", "text": "...", "tags": ["work"] } ]
//! }
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;
mod records;

pub use records::RecordStore;

/// Abstract interface for record persistence.
pub trait DataStore {
    /// Load the persisted records, or an empty store if nothing was saved yet
    fn load(&self) -> Result<RecordStore>;

    /// Replace the persisted records with `records`
    fn save(&mut self, records: &RecordStore) -> Result<()>;

    /// Human-readable location, used in log and status lines
    fn describe(&self) -> String;
}
