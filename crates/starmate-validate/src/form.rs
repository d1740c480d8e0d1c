//! Profile form model.
//!
//! Runs every field validator over a [`ProfileInput`], accumulating all
//! failures, and assembles a [`ProfileRecord`] with the derived zodiac,
//! horoscope and age when every field passes.

use starmate_model::{
    Field, FormValidationError, InterestsInput, ProfileInput, ProfileRecord,
};
use starmate_transform::derive_zodiac_and_age;
use tracing::debug;

use crate::fields::{
    validate_birthday, validate_gender, validate_height, validate_interests, validate_name,
    validate_weight,
};
use crate::options::ValidationOptions;

/// Validate and normalize a profile form submission.
///
/// Returns the full field -> message map when any field fails; no partial
/// record is produced.
pub fn validate_profile(
    input: &ProfileInput,
    options: &ValidationOptions,
) -> Result<ProfileRecord, FormValidationError> {
    let today = options.today();
    let mut errors = FormValidationError::new();

    let name = errors.check(Field::Name, validate_name(&input.name));
    let gender = errors.check(Field::Gender, validate_gender(&input.gender));
    let birthday = errors.check(Field::Birthday, validate_birthday(&input.birthday, today));
    let height = errors.check(Field::Height, validate_height(&input.height));
    let weight = errors.check(Field::Weight, validate_weight(&input.weight));
    let interests = errors.check(Field::Interests, validate_interests(&input.interests));

    match (name, gender, birthday, height, weight, interests) {
        (Some(name), Some(gender), Some(birthday), Some(height), Some(weight), Some(interests))
            if errors.is_empty() =>
        {
            let (zodiac, age) = derive_zodiac_and_age(birthday, today);
            debug!(%zodiac, age, interests = interests.len(), "profile accepted");
            Ok(ProfileRecord {
                name,
                birthday,
                height,
                weight,
                interests,
                gender,
                zodiac,
                horoscope: zodiac.horoscope(),
                age,
            })
        }
        _ => {
            debug!(
                failed = errors.len(),
                fields = ?errors.fields().collect::<Vec<_>>(),
                "profile rejected"
            );
            Err(errors)
        }
    }
}

/// Validate the interests-only form, returning the normalized tags.
pub fn validate_interests_form(
    interests: &InterestsInput,
) -> Result<Vec<String>, FormValidationError> {
    let mut errors = FormValidationError::new();
    let tags = errors.check(Field::Interests, validate_interests(interests));
    match tags {
        Some(tags) => Ok(tags),
        None => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use starmate_model::{Gender, Zodiac};

    fn options() -> ValidationOptions {
        ValidationOptions::default().with_today(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap())
    }

    fn valid_input() -> ProfileInput {
        ProfileInput {
            name: " Ayu ".to_string(),
            birthday: "15 06 2000".to_string(),
            height: "160".to_string(),
            weight: "50".to_string(),
            interests: InterestsInput::from(" music, music ,art"),
            gender: "female".to_string(),
        }
    }

    #[test]
    fn valid_profile_is_normalized() {
        let record = validate_profile(&valid_input(), &options()).unwrap();
        assert_eq!(record.name, "Ayu");
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.zodiac, Zodiac::Gemini);
        assert_eq!(record.horoscope, "Gemini horoscope");
        assert_eq!(record.age, 23);
        assert_eq!(record.interests, vec!["music", "art"]);
    }

    #[test]
    fn negative_height_only_flags_height() {
        let input = ProfileInput {
            height: "-5".to_string(),
            ..valid_input()
        };
        let errors = validate_profile(&input, &options()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Height), Some("Height must be positive"));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate_profile(&ProfileInput::default(), &options()).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![
                Field::Name,
                Field::Gender,
                Field::Birthday,
                Field::Height,
                Field::Weight,
                Field::Interests,
            ]
        );
    }

    #[test]
    fn interests_form_requires_a_tag() {
        let errors = validate_interests_form(&InterestsInput::List(vec![" ".to_string()]))
            .unwrap_err();
        assert_eq!(errors.get(Field::Interests), Some("Interests are required"));

        let tags =
            validate_interests_form(&InterestsInput::List(vec!["golf".to_string()])).unwrap();
        assert_eq!(tags, vec!["golf"]);
    }
}
