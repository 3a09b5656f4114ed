//! # CLI Layer
//!
//! The interactive front end of the binary. It is the only part of addrbook
//! that touches stdin/stdout:
//!
//! 1. **Splitting** input lines into a command word and arguments ([`dispatch`])
//! 2. **Resolving** the word to a command (exact name, then unique prefix)
//! 3. **Calling** the matching [`AddressBookApi`](addrbook::api::AddressBookApi) method
//! 4. **Rendering** the returned `CmdResult` as tables and colored messages ([`render`])
//!
//! `add <name>` switches the loop into a [`wizard`] that asks for the
//! remaining fields one prompt at a time.
//!
//! ## Testing
//!
//! [`repl::Repl::handle_line`] maps a line to output text, so the loop is
//! tested against an `InMemoryStore` without a terminal. The `tests/`
//! directory drives the real binary over stdin.

pub mod dispatch;
pub mod render;
pub mod repl;
pub mod wizard;
