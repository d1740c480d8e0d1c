//! Zodiac sign and age derivation from a birth date.
//!
//! Both values are pure functions of the birth date and a reference date
//! ("today"). Callers pass `today` explicitly so results are reproducible.

use chrono::{Datelike, NaiveDate};
use starmate_model::Zodiac;

/// Derive the zodiac sign and age for a birth date.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use starmate_model::Zodiac;
/// use starmate_transform::zodiac::derive_zodiac_and_age;
///
/// let birthday = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
///
/// let day_before = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
/// assert_eq!(derive_zodiac_and_age(birthday, day_before), (Zodiac::Gemini, 23));
///
/// let on_the_day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(derive_zodiac_and_age(birthday, on_the_day), (Zodiac::Gemini, 24));
/// ```
pub fn derive_zodiac_and_age(birthday: NaiveDate, today: NaiveDate) -> (Zodiac, u32) {
    (zodiac_for_date(birthday), calculate_age(birthday, today))
}

/// Zodiac sign for the month and day of `date`.
pub fn zodiac_for_date(date: NaiveDate) -> Zodiac {
    Zodiac::from_month_day(date.month(), date.day())
}

/// Completed years between `birthday` and `today`.
///
/// The year difference is reduced by one while this year's birthday is
/// still ahead. A birthday after `today` yields 0.
pub fn calculate_age(birthday: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birthday.year();
    if (today.month(), today.day()) < (birthday.month(), birthday.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Horoscope display string for a birth date, e.g. "Leo horoscope".
pub fn horoscope_for_date(date: NaiveDate) -> String {
    zodiac_for_date(date).horoscope()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_age_before_and_on_birthday() {
        let birthday = date(2000, 6, 15);
        assert_eq!(calculate_age(birthday, date(2024, 6, 14)), 23);
        assert_eq!(calculate_age(birthday, date(2024, 6, 15)), 24);
        assert_eq!(calculate_age(birthday, date(2024, 12, 31)), 24);
    }

    #[test]
    fn test_age_leap_day_birthday() {
        let birthday = date(2004, 2, 29);
        assert_eq!(calculate_age(birthday, date(2023, 2, 28)), 18);
        assert_eq!(calculate_age(birthday, date(2023, 3, 1)), 19);
        assert_eq!(calculate_age(birthday, date(2024, 2, 29)), 20);
    }

    #[test]
    fn test_age_future_birthday_saturates() {
        assert_eq!(calculate_age(date(2030, 1, 1), date(2024, 1, 1)), 0);
        assert_eq!(calculate_age(date(2024, 5, 2), date(2024, 5, 1)), 0);
    }

    #[test]
    fn test_horoscope_for_date() {
        assert_eq!(horoscope_for_date(date(1990, 7, 23)), "Leo horoscope");
        assert_eq!(horoscope_for_date(date(1990, 1, 19)), "Capricorn horoscope");
    }
}
