//! The interactive command loop.
//!
//! [`Repl`] owns the API and a mode: either waiting for a command or in the
//! middle of an `add <name>` wizard. [`Repl::handle_line`] turns one line into
//! output text and a [`Flow`] so it can be tested without a terminal;
//! [`Repl::run`] wires it to any reader and writer.
//!
//! Failures the user can fix (bad input, unknown names) are printed and the
//! loop continues. Storage failures end the loop with an error.
//!
//! `exit` or `close` typed at a wizard prompt leaves the program; the
//! unfinished contact is discarded with a warning, as it is at end of input.

use super::dispatch::{self, expect_args, lookup, parse_input, Command};
use super::render;
use super::wizard::ContactWizard;
use addrbook::api::{AddressBookApi, CmdMessage, CmdResult};
use addrbook::error::{BookError, Result};
use addrbook::model::Contact;
use addrbook::store::DataStore;
use log::debug;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter a command: ";
const GREETING: &str = "Welcome to the assistant bot! Type 'help' to list commands.";
const FAREWELL: &str = "Good bye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

enum Mode {
    Command,
    AddingContact(ContactWizard),
}

pub struct Repl<S: DataStore> {
    api: AddressBookApi<S>,
    mode: Mode,
}

impl<S: DataStore> Repl<S> {
    pub fn new(api: AddressBookApi<S>) -> Self {
        Self {
            api,
            mode: Mode::Command,
        }
    }

    pub fn prompt(&self) -> String {
        match &self.mode {
            Mode::Command => PROMPT.to_string(),
            Mode::AddingContact(wizard) => wizard.prompt(),
        }
    }

    /// Reads lines until `exit`/`close` or end of input, then saves.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{}", GREETING)?;
        let mut line = String::new();
        loop {
            write!(out, "{}", self.prompt())?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                let pending = std::mem::replace(&mut self.mode, Mode::Command);
                if let Mode::AddingContact(wizard) = pending {
                    writeln!(out, "{}", discard(wizard))?;
                }
                break;
            }

            let (flow, text) = self.handle_line(&line)?;
            if !text.is_empty() {
                writeln!(out, "{}", text)?;
            }
            if flow == Flow::Exit {
                break;
            }
        }

        self.api.save()?;
        writeln!(out, "{}", FAREWELL)?;
        Ok(())
    }

    /// Handles one line. Only fatal errors are returned; everything else is
    /// rendered into the output text.
    pub fn handle_line(&mut self, line: &str) -> Result<(Flow, String)> {
        let outcome = match std::mem::replace(&mut self.mode, Mode::Command) {
            Mode::Command => self.run_command(line),
            Mode::AddingContact(wizard) if is_exit_word(line) => {
                Ok((Flow::Exit, discard(wizard)))
            }
            Mode::AddingContact(wizard) => self.continue_wizard(wizard, line),
        };
        match outcome {
            Ok(result) => Ok(result),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                debug!("Command failed: {:?}", err);
                Ok((Flow::Continue, render::render_error(&err)))
            }
        }
    }

    fn continue_wizard(&mut self, mut wizard: ContactWizard, line: &str) -> Result<(Flow, String)> {
        match wizard.feed(line) {
            Ok(Some(contact)) => {
                let result = self.api.add_contact(contact)?;
                Ok((Flow::Continue, render_result(&result)))
            }
            Ok(None) => {
                self.mode = Mode::AddingContact(wizard);
                Ok((Flow::Continue, String::new()))
            }
            Err(err) => {
                self.mode = Mode::AddingContact(wizard);
                Err(err.into())
            }
        }
    }

    fn run_command(&mut self, line: &str) -> Result<(Flow, String)> {
        let input = match parse_input(line) {
            Some(input) => input,
            None => return Ok((Flow::Continue, String::new())),
        };
        let command = lookup(&input.word)?;
        let args = input.args.as_slice();
        debug!("Dispatching {:?} with {} argument(s)", command, args.len());

        let result = match command {
            Command::Exit => return Ok((Flow::Exit, String::new())),
            Command::Hello => {
                return Ok((Flow::Continue, "How can I help you?".to_string()));
            }
            Command::Help => {
                return Ok((Flow::Continue, render::render_help(dispatch::COMMANDS)));
            }
            Command::Add => {
                expect_args(command, args, 1, 2)?;
                if args.len() == 2 {
                    self.api.add_contact_with_phone(args[0], args[1])?
                } else {
                    let name = self.api.check_new_name(args[0])?;
                    let wizard = ContactWizard::new(Contact::new(&name)?);
                    self.mode = Mode::AddingContact(wizard);
                    return Ok((Flow::Continue, String::new()));
                }
            }
            Command::Change => {
                if args.len() < 3 {
                    return Err(BookError::Usage(dispatch::usage_of(command).to_string()));
                }
                let values: Vec<String> = args[2..].iter().map(|v| v.to_string()).collect();
                self.api.change_contact(args[0], args[1], &values)?
            }
            Command::Delete => {
                expect_args(command, args, 1, 1)?;
                self.api.delete_contact(args[0])?
            }
            Command::Phone => {
                expect_args(command, args, 1, 1)?;
                let result = self.api.phones(args[0])?;
                let phones = result
                    .contacts
                    .first()
                    .map(render::render_phones)
                    .unwrap_or_default();
                return Ok((
                    Flow::Continue,
                    render::join_sections(vec![
                        phones,
                        render::render_messages(&result.messages),
                    ]),
                ));
            }
            Command::All => {
                expect_args(command, args, 0, 0)?;
                self.api.all_contacts()?
            }
            Command::Search => self.api.search(input.rest)?,
            Command::Birthdays => {
                expect_args(command, args, 0, 1)?;
                self.api.birthdays(args.first().copied())?
            }
            Command::ShowBirthday => {
                expect_args(command, args, 1, 1)?;
                self.api.show_birthday(args[0])?
            }
            Command::AddNote => self.api.add_note(input.rest)?,
            Command::AllNotes => match args {
                [] => self.api.all_notes(false)?,
                ["--by-tag"] => self.api.all_notes(true)?,
                _ => return Err(BookError::Usage(dispatch::usage_of(command).to_string())),
            },
            Command::SearchNote => self.api.search_notes(input.rest)?,
            Command::ChangeNote => {
                if args.len() < 2 {
                    return Err(BookError::Usage(dispatch::usage_of(command).to_string()));
                }
                self.api.change_note(args[0], input.text_after(1))?
            }
            Command::DeleteNote => {
                expect_args(command, args, 1, 1)?;
                self.api.delete_note(args[0])?
            }
            Command::AddTag => {
                if args.len() < 2 {
                    return Err(BookError::Usage(dispatch::usage_of(command).to_string()));
                }
                let tags: Vec<String> = args[1..].iter().map(|t| t.to_string()).collect();
                self.api.add_tags(args[0], &tags)?
            }
            Command::DeleteTag => {
                expect_args(command, args, 2, 2)?;
                self.api.delete_tag(args[0], args[1])?
            }
        };

        Ok((Flow::Continue, render_result(&result)))
    }
}

fn is_exit_word(line: &str) -> bool {
    dispatch::COMMANDS
        .iter()
        .filter(|spec| spec.command == Command::Exit)
        .any(|spec| spec.names.iter().any(|name| line.trim().eq_ignore_ascii_case(name)))
}

fn discard(wizard: ContactWizard) -> String {
    debug!(
        "Dropping unfinished contact {} at step {:?}",
        wizard.name(),
        wizard.step()
    );
    render::render_messages(&[CmdMessage::warning(format!(
        "Contact {} was not added",
        wizard.name()
    ))])
}

// Phone listings are rendered by the Phone arm itself; everything else shows
// its tables followed by its messages.
fn render_result(result: &CmdResult) -> String {
    render::join_sections(vec![
        render::render_contacts(&result.contacts),
        render::render_notes(&result.notes),
        render::render_birthdays(&result.birthdays),
        render::render_messages(&result.messages),
    ])
}
