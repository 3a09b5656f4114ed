//! `change <name> <field> <values...>`
//!
//! | field          | values        | effect                          |
//! |----------------|---------------|---------------------------------|
//! | `phone`        | `new`         | append a phone                  |
//! | `phone`        | `old new`     | replace a phone in place        |
//! | `remove-phone` | `old`         | drop a phone                    |
//! | `email`        | `new`/`old new` | as for phones                 |
//! | `remove-email` | `old`         | drop an email                   |
//! | `address`      | free text     | set the address                 |
//! | `birthday`     | `DD.MM.YYYY`  | set the birthday                |
//! | `name`         | `new`         | rename, the new name must be free |

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use crate::model::{Address, Birthday, Email, Phone};
use crate::store::RecordStore;
use crate::validation;

pub const FIELDS: &[&str] = &[
    "phone",
    "remove-phone",
    "email",
    "remove-email",
    "address",
    "birthday",
    "name",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeRequest {
    AddPhone(Phone),
    ReplacePhone { old: Phone, new: Phone },
    RemovePhone(Phone),
    AddEmail(Email),
    ReplaceEmail { old: Email, new: Email },
    RemoveEmail(Email),
    Address(Address),
    Birthday(Birthday),
    Rename(String),
}

impl ChangeRequest {
    /// Validates every value before anything is touched.
    pub fn parse(field: &str, values: &[String]) -> Result<Self> {
        let field = field.to_lowercase();
        match (field.as_str(), values) {
            ("phone", [new]) => Ok(Self::AddPhone(Phone::parse(new)?)),
            ("phone", [old, new]) => Ok(Self::ReplacePhone {
                old: Phone::parse(old)?,
                new: Phone::parse(new)?,
            }),
            ("remove-phone", [old]) => Ok(Self::RemovePhone(Phone::parse(old)?)),
            ("email", [new]) => Ok(Self::AddEmail(Email::parse(new)?)),
            ("email", [old, new]) => Ok(Self::ReplaceEmail {
                old: Email::parse(old)?,
                new: Email::parse(new)?,
            }),
            ("remove-email", [old]) => Ok(Self::RemoveEmail(Email::parse(old)?)),
            ("address", values) if !values.is_empty() => {
                Ok(Self::Address(Address::parse(&values.join(" "))?))
            }
            ("birthday", [date]) => Ok(Self::Birthday(Birthday::parse(date)?)),
            ("name", [new]) => Ok(Self::Rename(validation::validate_name(new)?)),
            (known, _) if FIELDS.contains(&known) => Err(BookError::Usage(usage_for(known))),
            (unknown, _) => Err(BookError::Usage(format!(
                "unknown field '{}', expected one of: {}",
                unknown,
                FIELDS.join(", ")
            ))),
        }
    }
}

fn usage_for(field: &str) -> String {
    let values = match field {
        "phone" => "[<old_phone>] <new_phone>",
        "email" => "[<old_email>] <new_email>",
        "remove-phone" => "<phone>",
        "remove-email" => "<email>",
        "address" => "<address text>",
        "birthday" => "<DD.MM.YYYY>",
        _ => "<new_name>",
    };
    format!("change <name> {} {}", field, values)
}

pub fn run(records: &mut RecordStore, name: &str, request: ChangeRequest) -> Result<CmdResult> {
    let mut current = name.to_string();
    let message = match request {
        ChangeRequest::Rename(new_name) => {
            records.rename_contact(name, new_name.clone())?;
            let message = format!("Contact renamed: {} -> {}", name, new_name);
            current = new_name;
            message
        }
        ChangeRequest::AddPhone(phone) => {
            if !records.contact_mut(name)?.add_phone(phone.clone()) {
                return Ok(unchanged(format!("{} already has phone {}", name, phone)));
            }
            format!("Phone {} added to {}", phone, name)
        }
        ChangeRequest::ReplacePhone { old, new } => {
            let contact = records.contact_mut(name)?;
            let pos = position_of(&contact.phones, &old, "Phone", name)?;
            if contact.has_phone(&new) {
                contact.phones.remove(pos);
            } else {
                contact.phones[pos] = new.clone();
            }
            format!("Phone {} changed to {} for {}", old, new, name)
        }
        ChangeRequest::RemovePhone(old) => {
            let contact = records.contact_mut(name)?;
            let pos = position_of(&contact.phones, &old, "Phone", name)?;
            contact.phones.remove(pos);
            format!("Phone {} removed from {}", old, name)
        }
        ChangeRequest::AddEmail(email) => {
            if !records.contact_mut(name)?.add_email(email.clone()) {
                return Ok(unchanged(format!("{} already has email {}", name, email)));
            }
            format!("Email {} added to {}", email, name)
        }
        ChangeRequest::ReplaceEmail { old, new } => {
            let contact = records.contact_mut(name)?;
            let pos = position_of(&contact.emails, &old, "Email", name)?;
            if contact.has_email(&new) {
                contact.emails.remove(pos);
            } else {
                contact.emails[pos] = new.clone();
            }
            format!("Email {} changed to {} for {}", old, new, name)
        }
        ChangeRequest::RemoveEmail(old) => {
            let contact = records.contact_mut(name)?;
            let pos = position_of(&contact.emails, &old, "Email", name)?;
            contact.emails.remove(pos);
            format!("Email {} removed from {}", old, name)
        }
        ChangeRequest::Address(address) => {
            let message = format!("Address of {} set to {}", name, address);
            records.contact_mut(name)?.address = Some(address);
            message
        }
        ChangeRequest::Birthday(birthday) => {
            let message = format!("Birthday of {} set to {}", name, birthday);
            records.contact_mut(name)?.birthday = Some(birthday);
            message
        }
    };

    let updated = records.contact(&current)?.clone();
    Ok(CmdResult::modified()
        .with_contacts(vec![updated])
        .with_message(CmdMessage::success(message)))
}

// Appending a value the contact already has changes nothing.
fn unchanged(message: String) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(message))
}

fn position_of<T: PartialEq + std::fmt::Display>(
    values: &[T],
    value: &T,
    kind: &str,
    name: &str,
) -> Result<usize> {
    values.iter().position(|v| v == value).ok_or_else(|| {
        BookError::NotFound(format!("{} {} not found for contact '{}'", kind, value, name))
    })
}
