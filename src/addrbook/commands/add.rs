use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use crate::model::{Contact, Phone};
use crate::store::RecordStore;
use crate::validation;

/// Checks that `name` is well-formed and still free, before any prompting
/// starts for it.
pub fn check_new_name(records: &RecordStore, name: &str) -> Result<String> {
    let name = validation::validate_name(name)?;
    if records.find_contact(&name).is_some() {
        return Err(BookError::DuplicateName(name));
    }
    Ok(name)
}

/// Stores a fully built contact.
pub fn run(records: &mut RecordStore, contact: Contact) -> Result<CmdResult> {
    let name = contact.name.clone();
    records.insert_contact(contact.clone())?;
    Ok(CmdResult::modified()
        .with_contacts(vec![contact])
        .with_message(CmdMessage::success(format!("Contact added: {}", name))))
}

/// One-shot `add <name> <phone>`.
pub fn with_phone(records: &mut RecordStore, name: &str, phone: &str) -> Result<CmdResult> {
    let name = check_new_name(records, name)?;
    let mut contact = Contact::new(&name)?;
    contact.add_phone(Phone::parse(phone)?);
    run(records, contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::view;

    #[test]
    fn added_phones_are_returned_by_lookup() {
        let mut records = RecordStore::new();
        with_phone(&mut records, "Ann", "050-123-4567").unwrap();

        let result = view::phones(&records, "Ann").unwrap();
        let phones: Vec<&str> = result.contacts[0]
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect();
        assert_eq!(phones, vec!["0501234567"]);
    }

    #[test]
    fn duplicate_name_leaves_original_untouched() {
        let mut records = RecordStore::new();
        with_phone(&mut records, "Ann", "0501234567").unwrap();
        let before = records.clone();

        let err = with_phone(&mut records, "Ann", "0679876543").unwrap_err();
        assert!(matches!(err, BookError::DuplicateName(_)));
        assert_eq!(records, before);

        let err = run(&mut records, Contact::new("Ann").unwrap()).unwrap_err();
        assert!(matches!(err, BookError::DuplicateName(_)));
        assert_eq!(records, before);
    }

    #[test]
    fn invalid_phone_creates_nothing() {
        let mut records = RecordStore::new();
        let err = with_phone(&mut records, "Ann", "12").unwrap_err();
        assert!(matches!(err, BookError::InvalidFormat(_)));
        assert!(records.find_contact("Ann").is_none());
    }

    #[test]
    fn result_is_marked_modified() {
        let mut records = RecordStore::new();
        let result = run(&mut records, Contact::new("Ann").unwrap()).unwrap();
        assert!(result.modified);
        assert_eq!(result.messages[0].content, "Contact added: Ann");
    }
}
