//! Raw and validated profile representations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Gender, Zodiac};

/// `chrono` format of the birthday field ("DD MM YYYY").
pub const BIRTHDAY_FORMAT: &str = "%d %m %Y";

/// Interests as entered: either one comma-separated string (about form) or
/// an ordered list of tags (interests form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InterestsInput {
    Text(String),
    List(Vec<String>),
}

impl Default for InterestsInput {
    fn default() -> Self {
        InterestsInput::Text(String::new())
    }
}

impl InterestsInput {
    /// Splits the input into raw, untrimmed tags.
    pub fn raw_tags(&self) -> Vec<&str> {
        match self {
            InterestsInput::Text(text) => text.split(',').collect(),
            InterestsInput::List(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for InterestsInput {
    fn from(value: &str) -> Self {
        InterestsInput::Text(value.to_string())
    }
}

impl From<Vec<String>> for InterestsInput {
    fn from(value: Vec<String>) -> Self {
        InterestsInput::List(value)
    }
}

/// Untrusted profile form input. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    pub name: String,
    pub birthday: String,
    pub height: String,
    pub weight: String,
    pub interests: InterestsInput,
    pub gender: String,
}

/// A validated, normalized profile with its derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub birthday: NaiveDate,
    pub height: u32,
    pub weight: u32,
    /// Trimmed, non-empty, first-seen order, no duplicates.
    pub interests: Vec<String>,
    pub gender: Gender,
    pub zodiac: Zodiac,
    pub horoscope: String,
    pub age: u32,
}

impl ProfileRecord {
    /// Birthday rendered in the form's "DD MM YYYY" shape.
    pub fn birthday_text(&self) -> String {
        self.birthday.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl From<&ProfileRecord> for ProfileInput {
    fn from(record: &ProfileRecord) -> Self {
        Self {
            name: record.name.clone(),
            birthday: record.birthday_text(),
            height: record.height.to_string(),
            weight: record.weight.to_string(),
            interests: InterestsInput::List(record.interests.clone()),
            gender: record.gender.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interests_accept_text_or_list() {
        let text: ProfileInput =
            serde_json::from_str(r#"{"interests": "music, art"}"#).unwrap();
        assert_eq!(text.interests.raw_tags(), vec!["music", " art"]);

        let list: ProfileInput =
            serde_json::from_str(r#"{"interests": ["music", "art"]}"#).unwrap();
        assert_eq!(list.interests.raw_tags(), vec!["music", "art"]);
        assert_eq!(list.name, "");
    }

    #[test]
    fn record_stringifies_to_form_shape() {
        let record = ProfileRecord {
            name: "Ayu".to_string(),
            birthday: NaiveDate::from_ymd_opt(2000, 6, 5).unwrap(),
            height: 160,
            weight: 50,
            interests: vec!["music".to_string(), "rock, roll".to_string()],
            gender: Gender::Female,
            zodiac: Zodiac::Gemini,
            horoscope: Zodiac::Gemini.horoscope(),
            age: 24,
        };
        let input = ProfileInput::from(&record);
        assert_eq!(input.birthday, "05 06 2000");
        assert_eq!(input.height, "160");
        assert_eq!(
            input.interests.raw_tags(),
            vec!["music", "rock, roll"],
            "tags containing commas stay whole"
        );
        assert_eq!(input.gender, "female");
    }
}
