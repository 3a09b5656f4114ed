//! # Addrbook Architecture
//!
//! Addrbook is a small personal assistant for the terminal: an address book
//! (names, phones, emails, addresses, birthdays) and a notebook of tagged
//! notes, driven by a line-oriented command loop.
//!
//! The library holds everything except the terminal. The binary only reads
//! lines, dispatches them, and prints what comes back.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Command loop, prompts, dispatch, table rendering         │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the record store and its persistence backend        │
//! │  - Saves after mutations (autosave) or on request           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over RecordStore                     │
//! │  - Validates input through validation.rs before mutating    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore (in memory) + DataStore trait                │
//! │  - FileStore (JSON file), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Record store, storage abstraction and implementations
//! - [`model`]: Core data types (`Contact`, `Note` and validated fields)
//! - [`validation`]: Field validators and their errors
//! - [`calendar`]: Birthday date arithmetic
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Command loop, dispatcher, prompts and rendering for the binary
//!   (not part of the lib API)

pub mod api;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;
