//! Birthday arithmetic.
//!
//! A birthday recurs on the same month and day every year. Feb 29 birthdays
//! fall on Mar 1 in years without a leap day.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// The date a birthday is celebrated in `year`.
pub fn occurrence_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).unwrap_or_else(|| {
        // Only Feb 29 can be missing from a year.
        NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(birthday)
    })
}

/// The first celebration on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in(birthday, today.year());
    if this_year >= today {
        this_year
    } else {
        occurrence_in(birthday, today.year() + 1)
    }
}

pub fn days_until(birthday: NaiveDate, today: NaiveDate) -> i64 {
    (next_occurrence(birthday, today) - today).num_days()
}

/// Whether the next celebration falls within `[today, today + days]`.
pub fn is_within(birthday: NaiveDate, today: NaiveDate, days: u32) -> bool {
    days_until(birthday, today) <= i64::from(days)
}

/// Weekend dates move to the following Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn birthday_later_this_year() {
        assert_eq!(days_until(d(15, 6, 1990), d(1, 6, 2024)), 14);
        assert!(is_within(d(15, 6, 1990), d(1, 6, 2024), 30));
    }

    #[test]
    fn birthday_far_ahead_is_outside_window() {
        assert!(!is_within(d(15, 6, 1990), d(1, 1, 2024), 30));
    }

    #[test]
    fn birthday_wraps_into_next_year() {
        assert_eq!(next_occurrence(d(2, 1, 1990), d(30, 12, 2024)), d(2, 1, 2025));
        assert_eq!(days_until(d(2, 1, 1990), d(30, 12, 2024)), 3);
        assert!(is_within(d(2, 1, 1990), d(30, 12, 2024), 5));
    }

    #[test]
    fn birthday_today_is_day_zero() {
        assert_eq!(days_until(d(19, 10, 1985), d(19, 10, 2026)), 0);
        assert!(is_within(d(19, 10, 1985), d(19, 10, 2026), 0));
    }

    #[test]
    fn window_end_is_inclusive() {
        assert!(is_within(d(8, 3, 2000), d(1, 3, 2026), 7));
        assert!(!is_within(d(9, 3, 2000), d(1, 3, 2026), 7));
    }

    #[test]
    fn leap_day_moves_to_march_first_in_common_years() {
        assert_eq!(occurrence_in(d(29, 2, 2000), 2023), d(1, 3, 2023));
        assert_eq!(occurrence_in(d(29, 2, 2000), 2024), d(29, 2, 2024));
        assert_eq!(days_until(d(29, 2, 2000), d(28, 2, 2025)), 1);
        assert!(!is_within(d(29, 2, 2000), d(2, 3, 2025), 300));
    }

    #[test]
    fn weekend_celebrations_move_to_monday() {
        // 15.06.2024 is a Saturday, 16.06.2024 a Sunday.
        assert_eq!(congratulation_date(d(15, 6, 2024)), d(17, 6, 2024));
        assert_eq!(congratulation_date(d(16, 6, 2024)), d(17, 6, 2024));
        assert_eq!(congratulation_date(d(14, 6, 2024)), d(14, 6, 2024));
    }
}
