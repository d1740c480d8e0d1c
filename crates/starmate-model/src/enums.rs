//! Type-safe enumerations for profile attributes.
//!
//! These enums replace the free-form strings the profile screens and the
//! remote API exchange, so that an accepted profile can only carry one of
//! the known values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender choices offered by the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All selectable values, in display order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Returns the wire value sent to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Returns the label shown next to the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Parse a gender value (trimmed, case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {s}")),
        }
    }
}

/// Western zodiac sign.
///
/// Each sign covers a fixed, inclusive (month, day) range. The twelve ranges
/// partition the calendar year, so every valid date maps to exactly one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zodiac {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// A (month, day) pair, both one-based.
pub type MonthDay = (u32, u32);

/// Indexed by declaration order of [`Zodiac`].
const RANGES: [(Zodiac, MonthDay, MonthDay); 12] = [
    (Zodiac::Aries, (3, 21), (4, 19)),
    (Zodiac::Taurus, (4, 20), (5, 20)),
    (Zodiac::Gemini, (5, 21), (6, 20)),
    (Zodiac::Cancer, (6, 21), (7, 22)),
    (Zodiac::Leo, (7, 23), (8, 22)),
    (Zodiac::Virgo, (8, 23), (9, 22)),
    (Zodiac::Libra, (9, 23), (10, 22)),
    (Zodiac::Scorpio, (10, 23), (11, 21)),
    (Zodiac::Sagittarius, (11, 22), (12, 21)),
    (Zodiac::Capricorn, (12, 22), (1, 19)),
    (Zodiac::Aquarius, (1, 20), (2, 18)),
    (Zodiac::Pisces, (2, 19), (3, 20)),
];

impl Zodiac {
    /// All twelve signs, starting with Aries.
    pub const ALL: [Zodiac; 12] = [
        Zodiac::Aries,
        Zodiac::Taurus,
        Zodiac::Gemini,
        Zodiac::Cancer,
        Zodiac::Leo,
        Zodiac::Virgo,
        Zodiac::Libra,
        Zodiac::Scorpio,
        Zodiac::Sagittarius,
        Zodiac::Capricorn,
        Zodiac::Aquarius,
        Zodiac::Pisces,
    ];

    /// Returns the sign for a one-based (month, day) pair.
    ///
    /// `month` must be 1-12 and `day` 1-31. Debug builds panic otherwise;
    /// release builds map such pairs into Capricorn, the only range that
    /// wraps around the new year.
    pub fn from_month_day(month: u32, day: u32) -> Zodiac {
        debug_assert!(
            (1..=12).contains(&month) && (1..=31).contains(&day),
            "invalid (month, day) pair: ({month}, {day})"
        );
        RANGES
            .iter()
            .find(|(_, start, end)| range_contains(*start, *end, (month, day)))
            .map_or(Zodiac::Capricorn, |(sign, _, _)| *sign)
    }

    /// Returns the inclusive (start, end) range covered by this sign.
    pub fn date_range(&self) -> (MonthDay, MonthDay) {
        let (_, start, end) = RANGES[*self as usize];
        (start, end)
    }

    /// Returns true when the (month, day) pair falls inside this sign's range.
    pub fn contains(&self, month: u32, day: u32) -> bool {
        let (start, end) = self.date_range();
        range_contains(start, end, (month, day))
    }

    /// Returns the canonical sign name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Zodiac::Aries => "Aries",
            Zodiac::Taurus => "Taurus",
            Zodiac::Gemini => "Gemini",
            Zodiac::Cancer => "Cancer",
            Zodiac::Leo => "Leo",
            Zodiac::Virgo => "Virgo",
            Zodiac::Libra => "Libra",
            Zodiac::Scorpio => "Scorpio",
            Zodiac::Sagittarius => "Sagittarius",
            Zodiac::Capricorn => "Capricorn",
            Zodiac::Aquarius => "Aquarius",
            Zodiac::Pisces => "Pisces",
        }
    }

    /// Display string shown in the horoscope field, e.g. "Leo horoscope".
    pub fn horoscope(&self) -> String {
        format!("{} horoscope", self.as_str())
    }
}

fn range_contains(start: MonthDay, end: MonthDay, value: MonthDay) -> bool {
    if start <= end {
        start <= value && value <= end
    } else {
        value >= start || value <= end
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Zodiac {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Zodiac::ALL
            .into_iter()
            .find(|sign| sign.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| format!("Unknown zodiac sign: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_str() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" Female ".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"female\"");
    }

    #[test]
    fn test_zodiac_boundaries() {
        assert_eq!(Zodiac::from_month_day(3, 21), Zodiac::Aries);
        assert_eq!(Zodiac::from_month_day(3, 20), Zodiac::Pisces);
        assert_eq!(Zodiac::from_month_day(4, 19), Zodiac::Aries);
        assert_eq!(Zodiac::from_month_day(4, 20), Zodiac::Taurus);
        assert_eq!(Zodiac::from_month_day(12, 31), Zodiac::Capricorn);
        assert_eq!(Zodiac::from_month_day(1, 1), Zodiac::Capricorn);
        assert_eq!(Zodiac::from_month_day(2, 29), Zodiac::Pisces);
    }

    #[test]
    fn test_zodiac_range_endpoints_map_back() {
        for sign in Zodiac::ALL {
            let ((start_month, start_day), (end_month, end_day)) = sign.date_range();
            assert_eq!(Zodiac::from_month_day(start_month, start_day), sign);
            assert_eq!(Zodiac::from_month_day(end_month, end_day), sign);
        }
    }

    #[test]
    fn test_ranges_follow_declaration_order() {
        for (index, sign) in Zodiac::ALL.into_iter().enumerate() {
            assert_eq!(sign as usize, index);
            assert_eq!(RANGES[index].0, sign);
        }
        assert_eq!(Zodiac::Capricorn.date_range(), ((12, 22), (1, 19)));
        assert_eq!(Zodiac::Leo.date_range(), ((7, 23), (8, 22)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid (month, day) pair")]
    fn test_invalid_month_day_panics_in_debug() {
        let _ = Zodiac::from_month_day(13, 40);
    }

    #[test]
    fn test_zodiac_from_str_and_horoscope() {
        assert_eq!("sagittarius".parse::<Zodiac>().unwrap(), Zodiac::Sagittarius);
        assert!("Ophiuchus".parse::<Zodiac>().is_err());
        assert_eq!(Zodiac::Leo.horoscope(), "Leo horoscope");
    }
}
