//! Tests for starmate-model types.

use chrono::NaiveDate;
use starmate_model::{
    Field, FormValidationError, Gender, InterestsInput, ProfileInput, ProfileRecord, Zodiac,
};

fn sample_record() -> ProfileRecord {
    ProfileRecord {
        name: "Budi".to_string(),
        birthday: NaiveDate::from_ymd_opt(1995, 8, 23).unwrap(),
        height: 172,
        weight: 68,
        interests: vec!["hiking".to_string(), "coffee".to_string()],
        gender: Gender::Male,
        zodiac: Zodiac::Virgo,
        horoscope: "Virgo horoscope".to_string(),
        age: 29,
    }
}

#[test]
fn record_serializes() {
    let record = sample_record();
    let json = serde_json::to_string(&record).expect("serialize record");
    assert!(json.contains(r#""gender":"male""#));
    assert!(json.contains(r#""zodiac":"Virgo""#));
    let round: ProfileRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn record_to_input_keeps_every_field() {
    let input = ProfileInput::from(&sample_record());
    assert_eq!(input.name, "Budi");
    assert_eq!(input.birthday, "23 08 1995");
    assert_eq!(input.weight, "68");
    assert_eq!(
        input.interests,
        InterestsInput::List(vec!["hiking".to_string(), "coffee".to_string()])
    );
}

#[test]
fn every_day_of_a_leap_year_has_one_sign() {
    let mut day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    while day <= end {
        use chrono::Datelike;
        let matching = Zodiac::ALL
            .iter()
            .filter(|sign| sign.contains(day.month(), day.day()))
            .count();
        assert_eq!(matching, 1, "{day} matched {matching} signs");
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn empty_error_map_yields_value() {
    let errors = FormValidationError::new();
    assert!(!errors.contains(Field::Email));
    assert_eq!(errors.into_result(|| 42), Ok(42));
}
