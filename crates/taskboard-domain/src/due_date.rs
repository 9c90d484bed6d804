//! Due-date derivations.
//!
//! Pure functions over ISO calendar dates (`YYYY-MM-DD`). "Today" is the
//! local calendar day; the `_on` variants take it explicitly.

use chrono::{Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date-input value. Empty or malformed input yields `None`.
pub fn parse_due_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if !is_iso_date_shape(trimmed) {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// `%Y-%m-%d` alone accepts signs and unpadded fields; require `DDDD-DD-DD`.
fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole calendar days from `today` until `date`; negative once past.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

pub fn due_date_label(input: &str) -> String {
    due_date_label_on(input, today())
}

pub fn due_date_label_on(input: &str, today: NaiveDate) -> String {
    match parse_due_date(input) {
        Some(date) => label_for(date, today),
        None => String::new(),
    }
}

/// Label for an already parsed date.
pub fn label_for(date: NaiveDate, today: NaiveDate) -> String {
    let days = days_until(date, today);
    match days {
        0 => "Due today".to_string(),
        d if d > 0 => format!("Due in {} {}", d, day_unit(d)),
        d => format!("{} {} overdue", d.abs(), day_unit(d)),
    }
}

pub fn is_overdue(input: &str) -> bool {
    is_overdue_on(input, today())
}

pub fn is_overdue_on(input: &str, today: NaiveDate) -> bool {
    parse_due_date(input).is_some_and(|date| date < today)
}

fn day_unit(days: i64) -> &'static str {
    if days.abs() == 1 {
        "day"
    } else {
        "days"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_future_dates() {
        let today = date(2098, 12, 30);
        assert_eq!(due_date_label_on("2099-01-01", today), "Due in 2 days");
        assert_eq!(due_date_label_on("2098-12-31", today), "Due in 1 day");
    }

    #[test]
    fn test_far_future_counts_across_years() {
        let today = date(2024, 1, 1);
        let expected = (date(2099, 1, 1) - today).num_days();
        assert_eq!(
            due_date_label_on("2099-01-01", today),
            format!("Due in {} days", expected)
        );
    }

    #[test]
    fn test_due_today() {
        let today = date(2024, 3, 15);
        assert_eq!(due_date_label_on("2024-03-15", today), "Due today");
        assert!(!is_overdue_on("2024-03-15", today));
    }

    #[test]
    fn test_overdue_dates() {
        let today = date(2024, 3, 15);
        assert_eq!(due_date_label_on("2024-03-14", today), "1 day overdue");
        assert_eq!(due_date_label_on("2024-03-10", today), "5 days overdue");
        assert!(is_overdue_on("2024-03-14", today));
    }

    #[test]
    fn test_invalid_and_empty_input() {
        let today = date(2024, 3, 15);
        assert_eq!(due_date_label_on("", today), "");
        assert_eq!(due_date_label_on("   ", today), "");
        assert_eq!(due_date_label_on("not a date", today), "");
        assert_eq!(due_date_label_on("2024-02-30", today), "");
        assert!(!is_overdue_on("", today));
        assert!(!is_overdue_on("garbage", today));
    }

    #[test]
    fn test_label_against_local_today() {
        let today_str = format_due_date(today());
        assert_eq!(due_date_label(&today_str), "Due today");
        assert!(!is_overdue(&today_str));
        assert_eq!(due_date_label(""), "");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_due_date(" 2024-07-04 "), Some(date(2024, 7, 4)));
    }

    #[test]
    fn test_parse_requires_padded_iso_form() {
        let today = date(2024, 7, 1);
        for input in ["2024-7-4", "2024-07-4", "+2024-07-04", "24-07-04", "2024/07/04"] {
            assert_eq!(parse_due_date(input), None, "input {:?}", input);
            assert_eq!(due_date_label_on(input, today), "");
            assert!(!is_overdue_on(input, today));
        }
    }
}
