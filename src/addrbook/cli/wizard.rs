//! Step-by-step contact entry for `add <name>`.
//!
//! The wizard walks Phones → Emails → Address → Birthday. Each step takes one
//! line; `n` skips it. An invalid line leaves the wizard on the same step so
//! the user can retry, and nothing already entered is lost.

use addrbook::model::{Address, Birthday, Contact, Email, Phone};
use addrbook::validation::FieldError;

pub const SKIP: &str = "n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Phones,
    Emails,
    Address,
    Birthday,
}

#[derive(Debug, Clone)]
pub struct ContactWizard {
    contact: Contact,
    step: Step,
}

impl ContactWizard {
    pub fn new(contact: Contact) -> Self {
        Self {
            contact,
            step: Step::Phones,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn name(&self) -> &str {
        &self.contact.name
    }

    pub fn prompt(&self) -> String {
        match self.step {
            Step::Phones => format!(
                "Phone numbers for {}, comma separated ('{}' to skip): ",
                self.contact.name, SKIP
            ),
            Step::Emails => format!("Emails, comma separated ('{}' to skip): ", SKIP),
            Step::Address => format!("Address ('{}' to skip): ", SKIP),
            Step::Birthday => format!("Birthday as DD.MM.YYYY ('{}' to skip): ", SKIP),
        }
    }

    /// Feeds one line to the current step. Returns the finished contact after
    /// the last step, `None` while more steps remain.
    pub fn feed(&mut self, line: &str) -> Result<Option<Contact>, FieldError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(FieldError::Blank(self.field_name()));
        }
        let skip = line.eq_ignore_ascii_case(SKIP);

        match self.step {
            Step::Phones => {
                if !skip {
                    let phones = split_list(line, false)
                        .map(Phone::parse)
                        .collect::<Result<Vec<_>, _>>()?;
                    for phone in phones {
                        self.contact.add_phone(phone);
                    }
                }
                self.step = Step::Emails;
            }
            Step::Emails => {
                if !skip {
                    let emails = split_list(line, true)
                        .map(Email::parse)
                        .collect::<Result<Vec<_>, _>>()?;
                    for email in emails {
                        self.contact.add_email(email);
                    }
                }
                self.step = Step::Address;
            }
            Step::Address => {
                if !skip {
                    self.contact.address = Some(Address::parse(line)?);
                }
                self.step = Step::Birthday;
            }
            Step::Birthday => {
                if !skip {
                    self.contact.birthday = Some(Birthday::parse(line)?);
                }
                return Ok(Some(self.contact.clone()));
            }
        }
        Ok(None)
    }

    fn field_name(&self) -> &'static str {
        match self.step {
            Step::Phones => "phone list",
            Step::Emails => "email list",
            Step::Address => "address",
            Step::Birthday => "birthday",
        }
    }
}

// Phones may contain spaces ("050 123 45 67"), so only emails split on them.
fn split_list(line: &str, on_whitespace: bool) -> impl Iterator<Item = &str> {
    line.split(move |c: char| c == ',' || c == ';' || (on_whitespace && c.is_whitespace()))
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> ContactWizard {
        ContactWizard::new(Contact::new("Ann").unwrap())
    }

    #[test]
    fn walks_every_step_and_returns_contact() {
        let mut w = wizard();
        assert_eq!(w.feed("050-123-45-67, 0671112233").unwrap(), None);
        assert_eq!(w.step(), Step::Emails);
        assert_eq!(w.feed("ann@mail.com a.k@work.org").unwrap(), None);
        assert_eq!(w.feed("Kyiv, Main st 1").unwrap(), None);
        let contact = w.feed("15.06.1990").unwrap().unwrap();

        assert_eq!(contact.name, "Ann");
        assert_eq!(contact.phones.len(), 2);
        assert_eq!(contact.phones[0].as_str(), "0501234567");
        assert_eq!(contact.emails.len(), 2);
        assert_eq!(contact.address.unwrap().as_str(), "Kyiv, Main st 1");
        assert_eq!(contact.birthday.unwrap().to_string(), "15.06.1990");
    }

    #[test]
    fn n_skips_every_step() {
        let mut w = wizard();
        assert_eq!(w.feed("n").unwrap(), None);
        assert_eq!(w.feed("N").unwrap(), None);
        assert_eq!(w.feed("n").unwrap(), None);
        let contact = w.feed("n").unwrap().unwrap();
        assert!(contact.phones.is_empty());
        assert!(contact.emails.is_empty());
        assert!(contact.address.is_none());
        assert!(contact.birthday.is_none());
    }

    #[test]
    fn invalid_input_keeps_the_step() {
        let mut w = wizard();
        assert!(matches!(w.feed("0501234567, 123"), Err(FieldError::Phone(_))));
        assert_eq!(w.step(), Step::Phones);
        assert!(w.feed("0501234567").unwrap().is_none());

        assert!(matches!(w.feed("not-an-email"), Err(FieldError::Email(_))));
        assert_eq!(w.step(), Step::Emails);
        w.feed("n").unwrap();
        w.feed("n").unwrap();

        assert!(matches!(w.feed("1990-06-15"), Err(FieldError::Date(_))));
        assert_eq!(w.step(), Step::Birthday);
        let contact = w.feed("n").unwrap().unwrap();
        assert_eq!(contact.phones.len(), 1);
    }

    #[test]
    fn empty_line_asks_again() {
        let mut w = wizard();
        assert_eq!(w.feed("  "), Err(FieldError::Blank("phone list")));
        assert_eq!(w.step(), Step::Phones);
    }

    #[test]
    fn prompt_follows_the_step() {
        let mut w = wizard();
        assert!(w.prompt().contains("Phone numbers for Ann"));
        w.feed("n").unwrap();
        assert!(w.prompt().starts_with("Emails"));
    }
}
