//! Per-field validators.
//!
//! Each validator takes one raw field and returns the normalized value or the
//! message shown under the field. Validators never look at other fields,
//! except for the confirm-password check which compares two.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use starmate_model::{Gender, InterestsInput};
use starmate_transform::normalization::{
    BirthdayParse, MeasurementError, normalize_interests, parse_birthday,
    parse_positive_measurement,
};

/// Email shape: local part of letters, digits and `_'+-.`, ending in a
/// non-dot; a dotted domain ending in an alphabetic TLD of 2+ letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("Invalid email regex")
});

/// Validate an email address and return it trimmed.
pub fn validate_email(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    let well_formed =
        EMAIL_REGEX.is_match(trimmed) && !trimmed.starts_with('.') && !trimmed.contains("..");
    if well_formed {
        Ok(trimmed.to_string())
    } else {
        Err("Invalid email address.".to_string())
    }
}

/// Validate a password against the minimum length, counted in characters.
///
/// Passwords are never trimmed.
pub fn validate_password(value: &str, min_length: usize) -> Result<String, String> {
    if value.chars().count() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters."
        ));
    }
    Ok(value.to_string())
}

/// Check that the confirmation repeats the password exactly.
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<(), String> {
    if password == confirmation {
        Ok(())
    } else {
        Err("Passwords do not match.".to_string())
    }
}

/// Validate a username and return it trimmed.
pub fn validate_username(value: &str, max_length: usize) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Username is required".to_string());
    }
    if trimmed.chars().count() > max_length {
        return Err(format!(
            "Username must be at most {max_length} characters"
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate a display name and return it trimmed.
pub fn validate_name(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Name is required".to_string());
    }
    Ok(trimmed.to_string())
}

/// Validate a "DD MM YYYY" birthday that is not after `today`.
pub fn validate_birthday(value: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    match parse_birthday(value) {
        BirthdayParse::Date(date) if date > today => {
            Err("Birthday cannot be in the future".to_string())
        }
        BirthdayParse::Date(date) => Ok(date),
        BirthdayParse::NotACalendarDate(_) => Err("Invalid calendar date".to_string()),
        BirthdayParse::WrongShape(_) => Err("Invalid date format (DD MM YYYY)".to_string()),
    }
}

/// Validate a height in whole centimetres.
pub fn validate_height(value: &str) -> Result<u32, String> {
    validate_measurement("Height", value)
}

/// Validate a weight in whole kilograms.
pub fn validate_weight(value: &str) -> Result<u32, String> {
    validate_measurement("Weight", value)
}

fn validate_measurement(label: &str, value: &str) -> Result<u32, String> {
    parse_positive_measurement(value).map_err(|error| match error {
        MeasurementError::Empty => format!("{label} is required"),
        MeasurementError::NotAWholeNumber => format!("{label} must be a whole number"),
        MeasurementError::NotPositive => format!("{label} must be positive"),
        MeasurementError::TooLarge => format!("{label} is too large"),
    })
}

/// Validate and normalize interests: at least one tag must survive.
pub fn validate_interests(input: &InterestsInput) -> Result<Vec<String>, String> {
    let tags = normalize_interests(input);
    if tags.is_empty() {
        return Err("Interests are required".to_string());
    }
    Ok(tags)
}

/// Validate a gender selection.
pub fn validate_gender(value: &str) -> Result<Gender, String> {
    if value.trim().is_empty() {
        return Err("Gender is required".to_string());
    }
    value
        .parse::<Gender>()
        .map_err(|_| "Gender must be male or female".to_string())
}
