//! Integration tests for profile form validation.

use chrono::NaiveDate;
use proptest::prelude::*;
use starmate_model::{Field, FormValidationError, InterestsInput, ProfileInput};
use starmate_transform::derive_zodiac_and_age;
use starmate_validate::{ValidationOptions, validate_profile};

fn on(year: i32, month: u32, day: u32) -> ValidationOptions {
    ValidationOptions::default().with_today(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

fn input(birthday: &str, height: &str, interests: &str) -> ProfileInput {
    ProfileInput {
        name: "Rizky".to_string(),
        birthday: birthday.to_string(),
        height: height.to_string(),
        weight: "70".to_string(),
        interests: InterestsInput::from(interests),
        gender: "male".to_string(),
    }
}

fn render(errors: &FormValidationError) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn age_changes_on_the_birthday() {
    let profile = input("15 06 2000", "175", "golf");
    assert_eq!(validate_profile(&profile, &on(2024, 6, 14)).unwrap().age, 23);
    assert_eq!(validate_profile(&profile, &on(2024, 6, 15)).unwrap().age, 24);
}

#[test]
fn derived_fields_match_the_calculator() {
    let options = on(2025, 1, 1);
    let record = validate_profile(&input("21 03 1990", "175", "golf"), &options).unwrap();
    let expected = derive_zodiac_and_age(record.birthday, options.today());
    assert_eq!((record.zodiac, record.age), expected);
    assert_eq!(record.horoscope, "Aries horoscope");
}

#[test]
fn interests_are_normalized() {
    let record = validate_profile(&input("01 01 2001", "180", " music, music ,art"), &on(2024, 1, 1))
        .unwrap();
    assert_eq!(record.interests, vec!["music", "art"]);
}

#[test]
fn all_errors_are_listed_together() {
    let profile = ProfileInput {
        name: "   ".to_string(),
        birthday: "2000/06/15".to_string(),
        height: "-5".to_string(),
        weight: "heavy".to_string(),
        interests: InterestsInput::from(" , "),
        gender: "x".to_string(),
    };
    let errors = validate_profile(&profile, &on(2024, 1, 1)).unwrap_err();
    insta::assert_snapshot!(render(&errors), @r"
    name: Name is required
    gender: Gender must be male or female
    birthday: Invalid date format (DD MM YYYY)
    height: Height must be positive
    weight: Weight must be a whole number
    interests: Interests are required
    ");
}

#[test]
fn future_birthday_is_rejected() {
    let errors = validate_profile(&input("02 01 2024", "170", "golf"), &on(2024, 1, 1))
        .unwrap_err();
    assert!(errors.contains(Field::Birthday));
    assert_eq!(errors.len(), 1);
}

#[test]
fn tags_with_commas_survive_revalidation() {
    let mut profile = input("15 06 2000", "175", "");
    profile.interests = InterestsInput::List(vec!["rock, roll".to_string(), " jazz ".to_string()]);
    let options = on(2024, 6, 15);
    let record = validate_profile(&profile, &options).unwrap();
    assert_eq!(record.interests, vec!["rock, roll", "jazz"]);
    let again = validate_profile(&ProfileInput::from(&record), &options).unwrap();
    assert_eq!(again, record);
}

fn valid_profiles() -> impl Strategy<Value = ProfileInput> {
    (
        "[A-Za-z]{1,8}( [A-Za-z]{1,8})?",
        (1950i32..2020, 1u32..=366)
            .prop_filter_map("valid ordinal", |(year, ordinal)| {
                NaiveDate::from_yo_opt(year, ordinal)
            }),
        1u32..300,
        1u32..300,
        proptest::collection::vec("[a-z][a-z ,]{0,7}", 1..5),
        prop_oneof![Just("male"), Just("female"), Just(" Female ")],
    )
        .prop_map(|(name, birthday, height, weight, tags, gender)| ProfileInput {
            name,
            birthday: birthday.format("%d %m %Y").to_string(),
            height: height.to_string(),
            weight: weight.to_string(),
            interests: InterestsInput::List(tags),
            gender: gender.to_string(),
        })
}

proptest! {
    #[test]
    fn revalidating_a_record_is_idempotent(profile in valid_profiles()) {
        let options = on(2024, 6, 15);
        let record = validate_profile(&profile, &options).unwrap();
        let again = validate_profile(&ProfileInput::from(&record), &options).unwrap();
        prop_assert_eq!(again, record);
    }
}
