//! Command-line splitting and command lookup.
//!
//! A line is split into a command word and whitespace separated arguments.
//! The command word is case-insensitive and may be abbreviated to any prefix
//! that names exactly one command (`sh` for `show-birthday`); an exact name
//! always wins over a longer command that shares it as a prefix.

use addrbook::error::{BookError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Delete,
    Phone,
    All,
    Search,
    Birthdays,
    ShowBirthday,
    AddNote,
    AllNotes,
    SearchNote,
    ChangeNote,
    DeleteNote,
    AddTag,
    DeleteTag,
    Exit,
}

#[derive(Debug)]
pub struct CommandSpec {
    pub command: Command,
    pub names: &'static [&'static str],
    pub usage: &'static str,
    pub about: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: Command::Hello,
        names: &["hello"],
        usage: "hello",
        about: "Greet the assistant",
    },
    CommandSpec {
        command: Command::Help,
        names: &["help"],
        usage: "help",
        about: "List the available commands",
    },
    CommandSpec {
        command: Command::Add,
        names: &["add"],
        usage: "add <name> [phone]",
        about: "Add a contact (asks for the other fields when no phone is given)",
    },
    CommandSpec {
        command: Command::Change,
        names: &["change"],
        usage: "change <name> <field> <value...>",
        about: "Change a field: phone, email, remove-phone, remove-email, address, birthday, name",
    },
    CommandSpec {
        command: Command::Delete,
        names: &["delete"],
        usage: "delete <name>",
        about: "Delete a contact",
    },
    CommandSpec {
        command: Command::Phone,
        names: &["phone"],
        usage: "phone <name>",
        about: "Show a contact's phone numbers",
    },
    CommandSpec {
        command: Command::All,
        names: &["all"],
        usage: "all",
        about: "Show all contacts",
    },
    CommandSpec {
        command: Command::Search,
        names: &["search"],
        usage: "search <query>",
        about: "Search contacts and notes",
    },
    CommandSpec {
        command: Command::Birthdays,
        names: &["birthdays"],
        usage: "birthdays [days]",
        about: "Show birthdays in the next days",
    },
    CommandSpec {
        command: Command::ShowBirthday,
        names: &["show-birthday"],
        usage: "show-birthday <name>",
        about: "Show a contact's birthday",
    },
    CommandSpec {
        command: Command::AddNote,
        names: &["add-note"],
        usage: "add-note <text>",
        about: "Add a note",
    },
    CommandSpec {
        command: Command::AllNotes,
        names: &["all-notes"],
        usage: "all-notes [--by-tag]",
        about: "Show all notes, optionally grouped by tag",
    },
    CommandSpec {
        command: Command::SearchNote,
        names: &["search-note"],
        usage: "search-note <query>",
        about: "Search notes by text or tag",
    },
    CommandSpec {
        command: Command::ChangeNote,
        names: &["change-note"],
        usage: "change-note <id> <text>",
        about: "Replace a note's text",
    },
    CommandSpec {
        command: Command::DeleteNote,
        names: &["delete-note"],
        usage: "delete-note <id>",
        about: "Delete a note",
    },
    CommandSpec {
        command: Command::AddTag,
        names: &["add-tag"],
        usage: "add-tag <id> <tag...>",
        about: "Tag a note",
    },
    CommandSpec {
        command: Command::DeleteTag,
        names: &["delete-tag"],
        usage: "delete-tag <id> <tag>",
        about: "Remove a tag from a note",
    },
    CommandSpec {
        command: Command::Exit,
        names: &["exit", "close"],
        usage: "exit | close",
        about: "Save and leave",
    },
];

/// One input line, split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    /// Command word, lowercased
    pub word: String,
    pub args: Vec<&'a str>,
    /// Everything after the command word, trimmed
    pub rest: &'a str,
}

impl<'a> ParsedInput<'a> {
    /// The raw text after the first `n` arguments, inner spacing preserved.
    pub fn text_after(&self, n: usize) -> &'a str {
        let mut s = self.rest;
        for _ in 0..n {
            s = s.trim_start();
            let end = s.find(char::is_whitespace).unwrap_or(s.len());
            s = &s[end..];
        }
        s.trim()
    }
}

/// Splits a line; `None` for a blank one.
pub fn parse_input(line: &str) -> Option<ParsedInput<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.find(char::is_whitespace) {
        Some(idx) => (&line[..idx], line[idx..].trim()),
        None => (line, ""),
    };
    Some(ParsedInput {
        word: word.to_lowercase(),
        args: rest.split_whitespace().collect(),
        rest,
    })
}

/// Resolves a command word: exact name first, then a unique prefix.
pub fn lookup(word: &str) -> Result<Command> {
    if let Some(spec) = COMMANDS.iter().find(|spec| spec.names.contains(&word)) {
        return Ok(spec.command);
    }

    let candidates: Vec<(&str, Command)> = COMMANDS
        .iter()
        .flat_map(|spec| spec.names.iter().map(move |name| (*name, spec.command)))
        .filter(|(name, _)| name.starts_with(word))
        .collect();

    match candidates.as_slice() {
        [] => Err(BookError::UnknownCommand(format!(
            "Unknown command '{}'. Type 'help' to list commands.",
            word
        ))),
        [(_, command)] => Ok(*command),
        many => Err(BookError::UnknownCommand(format!(
            "Ambiguous command '{}', did you mean: {}?",
            word,
            many.iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

/// Fails with the command's usage line unless `args` has `min..=max` items.
pub fn expect_args(command: Command, args: &[&str], min: usize, max: usize) -> Result<()> {
    if args.len() < min || args.len() > max {
        return Err(BookError::Usage(usage_of(command).to_string()));
    }
    Ok(())
}

pub fn usage_of(command: Command) -> &'static str {
    COMMANDS
        .iter()
        .find(|spec| spec.command == command)
        .map(|spec| spec.usage)
        .unwrap_or_default()
}
