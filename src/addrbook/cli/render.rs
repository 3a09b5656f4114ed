//! Turns command results into terminal text.
//!
//! Every function returns a `String` (usually several lines); the command
//! loop decides where it goes. Tables are padded by display width so wide
//! characters line up.

use super::dispatch::CommandSpec;
use addrbook::api::{CmdMessage, MessageLevel, UpcomingBirthday};
use addrbook::config::BookConfig;
use addrbook::error::BookError;
use addrbook::model::{Contact, Note};
use addrbook::validation::format_date;
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const EMPTY_CELL: &str = "-";
const MAX_CELL_WIDTH: usize = 40;
const MAX_NOTE_WIDTH: usize = 60;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let text = message.content.as_str();
            match message.level {
                MessageLevel::Info => text.dimmed().to_string(),
                MessageLevel::Success => text.green().to_string(),
                MessageLevel::Warning => text.yellow().to_string(),
                MessageLevel::Error => text.red().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_error(err: &BookError) -> String {
    format!("Error: {}", err).red().to_string()
}

pub fn render_contacts(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return String::new();
    }
    let rows: Vec<Vec<String>> = contacts
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                join_or_empty(c.phones.iter().map(|p| p.to_string()), "\n"),
                join_or_empty(c.emails.iter().map(|e| e.to_string()), "\n"),
                c.address
                    .as_ref()
                    .map(|a| a.to_string())
                    .unwrap_or_else(|| EMPTY_CELL.to_string()),
                c.birthday
                    .map(|b| b.to_string())
                    .unwrap_or_else(|| EMPTY_CELL.to_string()),
            ]
        })
        .collect();
    render_table(
        &["Name", "Phones", "Emails", "Address", "Birthday"],
        rows,
        MAX_CELL_WIDTH,
    )
}

pub fn render_phones(contact: &Contact) -> String {
    if contact.phones.is_empty() {
        return String::new();
    }
    let mut out = format!("{}:", contact.name.bold());
    for phone in &contact.phones {
        out.push_str(&format!("\n  {}", phone));
    }
    out
}

pub fn render_notes(notes: &[Note]) -> String {
    if notes.is_empty() {
        return String::new();
    }
    let now = Utc::now();
    let rows: Vec<Vec<String>> = notes
        .iter()
        .map(|n| {
            vec![
                n.id.to_string(),
                join_or_empty(n.tags.iter().map(|t| format!("#{}", t)), " "),
                n.text.clone(),
                format_time_ago(n.created_at, now),
            ]
        })
        .collect();
    render_table(&["Id", "Tags", "Text", "Created"], rows, MAX_NOTE_WIDTH)
}

pub fn render_birthdays(birthdays: &[UpcomingBirthday]) -> String {
    if birthdays.is_empty() {
        return String::new();
    }
    let rows: Vec<Vec<String>> = birthdays
        .iter()
        .map(|u| {
            vec![
                u.contact.name.clone(),
                format_date(u.date),
                format_date(u.congratulate_on),
                match u.days_until {
                    0 => "today".to_string(),
                    1 => "tomorrow".to_string(),
                    n => format!("in {} days", n),
                },
                u.contact
                    .phones
                    .first()
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| EMPTY_CELL.to_string()),
            ]
        })
        .collect();
    render_table(
        &["Name", "Birthday", "Congratulate", "When", "Phone"],
        rows,
        MAX_CELL_WIDTH,
    )
}

pub fn render_config(config: &BookConfig) -> String {
    BookConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}", key, value)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_help(commands: &[CommandSpec]) -> String {
    let width = commands
        .iter()
        .map(|spec| spec.usage.width())
        .max()
        .unwrap_or(0);

    let mut out = "Available commands:".bold().to_string();
    for spec in commands {
        out.push_str(&format!(
            "\n  {}{}  {}",
            spec.usage.cyan(),
            " ".repeat(width - spec.usage.width()),
            spec.about
        ));
    }
    out
}

/// Joins the non-empty sections, one after another.
pub fn join_sections(sections: Vec<String>) -> String {
    sections
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_or_empty(values: impl Iterator<Item = String>, separator: &str) -> String {
    let joined = values.collect::<Vec<_>>().join(separator);
    if joined.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        joined
    }
}

// Cells wrap, never truncate. List cells hold one value per line and long
// text breaks between words.
fn render_table(headers: &[&str], rows: Vec<Vec<String>>, max_width: usize) -> String {
    let rows: Vec<Vec<Vec<String>>> = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| wrap_to_width(&cell, max_width))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .flat_map(|row| row[i].iter().map(|line| line.width()))
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header_cells: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad_to_width(h, *w))
        .collect();
    lines.push(header_cells.join("  ").trim_end().bold().to_string());

    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    lines.push(rule.join("  ").dimmed().to_string());

    for row in rows {
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        for n in 0..height {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| pad_to_width(cell.get(n).map(String::as_str).unwrap_or(""), *w))
                .collect();
            lines.push(cells.join("  ").trim_end().to_string());
        }
    }
    lines.join("\n")
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

/// Breaks `s` into lines no wider than `max_width`, keeping its own line
/// breaks. Words wider than the limit are split between characters.
fn wrap_to_width(s: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in s.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            for piece in split_long_word(word, max_width) {
                if !line.is_empty() && line.width() + 1 + piece.width() > max_width {
                    lines.push(std::mem::take(&mut line));
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&piece);
            }
        }
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn split_long_word(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for c in word.chars() {
        let char_width = c.width().unwrap_or(0);
        if !current.is_empty() && current_width + char_width > max_width {
            pieces.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += char_width;
    }
    pieces.push(current);
    pieces
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrbook::model::{Address, Birthday, Email, Phone};

    fn ann() -> Contact {
        let mut contact = Contact::new("Ann").unwrap();
        contact.add_phone(Phone::parse("0501234567").unwrap());
        contact.add_phone(Phone::parse("0671112233").unwrap());
        contact.birthday = Some(Birthday::parse("15.06.1990").unwrap());
        contact
    }

    #[test]
    fn contact_table_shows_every_field() {
        let out = render_contacts(&[ann()]);
        assert!(out.contains("Name"));
        assert!(out.contains("0501234567"));
        assert!(out.contains("0671112233"));
        assert!(out.contains("15.06.1990"));
        // header, rule, then one line per phone
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn contact_table_keeps_every_phone_and_email() {
        let mut contact = Contact::new("Ann").unwrap();
        for phone in [
            "0501111111",
            "0502222222",
            "0503333333",
            "0504444444",
            "0505555555",
        ] {
            contact.add_phone(Phone::parse(phone).unwrap());
        }
        for email in [
            "ann.longname.for.work@corporate-example.com",
            "ann.personal.mailbox@another-example.org",
        ] {
            contact.add_email(Email::parse(email).unwrap());
        }

        let out = render_contacts(&[contact]);
        for expected in [
            "0501111111",
            "0502222222",
            "0503333333",
            "0504444444",
            "0505555555",
            "ann.longname.for.work@corporate-example.com",
            "ann.personal.mailbox@another-example.org",
        ] {
            assert!(out.contains(expected), "missing {} in:\n{}", expected, out);
        }
        assert!(!out.contains('…'));
    }

    #[test]
    fn long_address_wraps_between_words() {
        let mut contact = Contact::new("Ann").unwrap();
        let address = "Flat 12, Building 7, Very Long Street Name, Kyiv, 01001, Ukraine";
        contact.address = Some(Address::parse(address).unwrap());
        let out = render_contacts(&[contact]);
        let shown: Vec<&str> = address.split_whitespace().collect();
        for word in shown {
            assert!(out.contains(word));
        }
        assert!(out.lines().count() > 3);
    }

    #[test]
    fn empty_lists_render_nothing() {
        assert!(render_contacts(&[]).is_empty());
        assert!(render_notes(&[]).is_empty());
        assert!(render_birthdays(&[]).is_empty());
    }

    #[test]
    fn phones_are_listed_one_per_line() {
        let out = render_phones(&ann());
        assert!(out.contains("Ann"));
        assert!(out.contains("\n  0501234567\n  0671112233"));
    }

    #[test]
    fn notes_show_tags_with_hash() {
        let mut note = Note::new(3, "Call mom\nabout trip".to_string());
        note.tags.insert("family".to_string());
        let out = render_notes(&[note]);
        assert!(out.contains("#family"));
        assert!(out.contains("Call mom"));
        assert!(out.contains("about trip"));
    }

    #[test]
    fn wrapping_breaks_between_words() {
        assert_eq!(wrap_to_width("abc def ghi", 7), vec!["abc def", "ghi"]);
        assert_eq!(wrap_to_width("abc", 7), vec!["abc"]);
        assert_eq!(wrap_to_width("one\ntwo", 20), vec!["one", "two"]);
        assert_eq!(wrap_to_width("", 5), vec![""]);
    }

    #[test]
    fn overlong_words_are_split_by_display_width() {
        assert_eq!(wrap_to_width("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_to_width("日本語テキ", 4), vec!["日本", "語テ", "キ"]);
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_to_width("日本", 6), "日本  ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }

    #[test]
    fn sections_skip_empty_parts() {
        assert_eq!(
            join_sections(vec!["a".into(), String::new(), "b".into()]),
            "a\nb"
        );
    }
}
