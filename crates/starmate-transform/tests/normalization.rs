//! Tests for profile field normalization.

use proptest::prelude::*;
use starmate_model::InterestsInput;
use starmate_transform::normalization::{
    BirthdayParse, MeasurementError, format_birthday, normalize_interests, parse_birthday,
    parse_positive_measurement,
};

#[test]
fn birthday_round_trips_through_form_shape() {
    let BirthdayParse::Date(date) = parse_birthday("01 12 1999") else {
        panic!("expected a date");
    };
    assert_eq!(format_birthday(date), "01 12 1999");
}

#[test]
fn negative_height_is_not_positive() {
    assert_eq!(
        parse_positive_measurement("-5"),
        Err(MeasurementError::NotPositive)
    );
}

proptest! {
    #[test]
    fn normalized_tags_are_trimmed_unique_and_non_empty(
        raw in proptest::collection::vec("[ a-c,]{0,6}", 0..8)
    ) {
        let tags = normalize_interests(&InterestsInput::List(raw.clone()));
        for (index, tag) in tags.iter().enumerate() {
            prop_assert!(!tag.is_empty());
            prop_assert_eq!(tag.trim(), tag.as_str());
            prop_assert!(!tags[..index].contains(tag));
        }
        // every non-empty raw tag survives
        for item in &raw {
            let trimmed = item.trim();
            if !trimmed.is_empty() {
                prop_assert!(tags.iter().any(|tag| tag == trimmed));
            }
        }
    }

    #[test]
    fn normalizing_twice_changes_nothing(raw in "[ a-c,]{0,24}") {
        let once = normalize_interests(&InterestsInput::Text(raw));
        let twice = normalize_interests(&InterestsInput::Text(once.join(", ")));
        prop_assert_eq!(once, twice);
    }
}
