use crate::calendar;
use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::RecordStore;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub contact: Contact,
    /// The birthday itself, in the year it next occurs
    pub date: NaiveDate,
    /// `date`, moved off a weekend
    pub congratulate_on: NaiveDate,
    pub days_until: i64,
}

/// `birthdays [days]`: contacts whose next birthday is `days` or fewer days
/// from `today`, soonest first.
pub fn run(records: &RecordStore, today: NaiveDate, days: u32) -> Result<CmdResult> {
    let mut upcoming: Vec<UpcomingBirthday> = records
        .contacts()
        .iter()
        .filter_map(|contact| {
            let birthday = contact.birthday?.date();
            if !calendar::is_within(birthday, today, days) {
                return None;
            }
            let date = calendar::next_occurrence(birthday, today);
            Some(UpcomingBirthday {
                contact: contact.clone(),
                date,
                congratulate_on: calendar::congratulation_date(date),
                days_until: calendar::days_until(birthday, today),
            })
        })
        .collect();
    upcoming.sort_by_key(|u| u.days_until);

    let message = if upcoming.is_empty() {
        CmdMessage::info(format!(
            "No birthdays in the next {}",
            plural(days as usize, "day")
        ))
    } else {
        CmdMessage::info(format!(
            "{} in the next {}",
            plural(upcoming.len(), "birthday"),
            plural(days as usize, "day")
        ))
    };
    Ok(CmdResult::default()
        .with_birthdays(upcoming)
        .with_message(message))
}
