//! Birthday parsing and formatting.
//!
//! The profile form accepts birthdays as "DD MM YYYY" only. Parsing is split
//! in two steps so callers can tell a malformed value from a well-formed one
//! that names a day the calendar does not have (e.g. "31 02 2000").

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use starmate_model::BIRTHDAY_FORMAT;

/// "DD MM YYYY" with ASCII digits only.
static BIRTHDAY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?-u:\d){2} (?-u:\d){2} (?-u:\d){4}$").expect("Invalid birthday regex")
});

/// Result of parsing a birthday string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayParse {
    /// Well-formed and a real calendar date.
    Date(NaiveDate),
    /// Matches "DD MM YYYY" but is not a calendar date.
    NotACalendarDate(String),
    /// Does not match "DD MM YYYY" (preserved, trimmed).
    WrongShape(String),
}

impl BirthdayParse {
    /// Get the date if parsing succeeded.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            BirthdayParse::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// Parse a birthday in "DD MM YYYY" form.
///
/// Surrounding whitespace is ignored; inner separators must be single spaces.
pub fn parse_birthday(value: &str) -> BirthdayParse {
    let trimmed = value.trim();
    if !is_birthday_shape(trimmed) {
        return BirthdayParse::WrongShape(trimmed.to_string());
    }
    match NaiveDate::parse_from_str(trimmed, BIRTHDAY_FORMAT) {
        Ok(date) => BirthdayParse::Date(date),
        Err(_) => BirthdayParse::NotACalendarDate(trimmed.to_string()),
    }
}

/// Check the two-digit day, two-digit month, four-digit year pattern.
pub fn is_birthday_shape(value: &str) -> bool {
    BIRTHDAY_REGEX.is_match(value)
}

/// Format a date as "DD MM YYYY".
pub fn format_birthday(date: NaiveDate) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}
