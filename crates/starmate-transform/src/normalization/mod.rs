//! Normalization functions for profile form fields.
//!
//! - **datetime**: "DD MM YYYY" birthday parsing and formatting
//! - **numeric**: positive whole-number measurements (height, weight)
//! - **tags**: interest tag trimming, de-duplication and editing

pub mod datetime;
pub mod numeric;
pub mod tags;

// Re-export commonly used items
pub use datetime::{BirthdayParse, format_birthday, is_birthday_shape, parse_birthday};
pub use numeric::{MeasurementError, parse_positive_measurement};
pub use tags::{InterestTags, normalize_interests, normalize_tags};
