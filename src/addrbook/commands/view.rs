use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// `phone <name>`: the contact, for its phone list.
pub fn phones(records: &RecordStore, name: &str) -> Result<CmdResult> {
    let contact = records.contact(name)?.clone();
    let mut result = CmdResult::default();
    if contact.phones.is_empty() {
        result.add_message(CmdMessage::info(format!("{} has no phone numbers", name)));
    }
    Ok(result.with_contacts(vec![contact]))
}

/// `all`: every contact in insertion order.
pub fn all(records: &RecordStore) -> Result<CmdResult> {
    let contacts = records.contacts().to_vec();
    let message = if contacts.is_empty() {
        CmdMessage::info("No contacts.")
    } else {
        CmdMessage::info(plural(contacts.len(), "contact"))
    };
    Ok(CmdResult::default()
        .with_contacts(contacts)
        .with_message(message))
}

/// `show-birthday <name>`
pub fn birthday(records: &RecordStore, name: &str) -> Result<CmdResult> {
    let contact = records.contact(name)?;
    let message = match &contact.birthday {
        Some(birthday) => CmdMessage::info(format!("{}'s birthday is on {}", name, birthday)),
        None => CmdMessage::warning(format!("{} has no birthday set", name)),
    };
    Ok(CmdResult::default()
        .with_contacts(vec![contact.clone()])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, change};
    use crate::error::BookError;

    #[test]
    fn all_lists_in_insertion_order() {
        let mut records = RecordStore::new();
        add::with_phone(&mut records, "Zoe", "0501234567").unwrap();
        add::with_phone(&mut records, "Ann", "0671112233").unwrap();

        let result = all(&records).unwrap();
        let names: Vec<&str> = result.contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Ann"]);
        assert_eq!(result.messages[0].content, "2 contacts");
    }

    #[test]
    fn empty_book_says_so() {
        let result = all(&RecordStore::new()).unwrap();
        assert!(result.contacts.is_empty());
        assert_eq!(result.messages[0].content, "No contacts.");
    }

    #[test]
    fn show_birthday_with_and_without_date() {
        let mut records = RecordStore::new();
        add::with_phone(&mut records, "Ann", "0501234567").unwrap();

        let result = birthday(&records, "Ann").unwrap();
        assert_eq!(result.messages[0].content, "Ann has no birthday set");

        let request =
            change::ChangeRequest::parse("birthday", &["15.06.1990".to_string()]).unwrap();
        change::run(&mut records, "Ann", request).unwrap();
        let result = birthday(&records, "Ann").unwrap();
        assert_eq!(result.messages[0].content, "Ann's birthday is on 15.06.1990");

        assert!(matches!(
            birthday(&records, "Bob"),
            Err(BookError::NotFound(_))
        ));
    }
}
