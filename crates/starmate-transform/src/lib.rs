//! Profile data transformation utilities.
//!
//! This crate provides the pure derivation and normalization logic used by
//! the profile forms:
//!
//! - **zodiac**: zodiac sign, horoscope and age from a birth date
//! - **normalization**: birthday, measurement and interest tag normalization

pub mod normalization;
pub mod zodiac;

// Re-export common functions for external use
pub use normalization::{InterestTags, normalize_interests, parse_birthday};
pub use zodiac::{calculate_age, derive_zodiac_and_age, zodiac_for_date};
