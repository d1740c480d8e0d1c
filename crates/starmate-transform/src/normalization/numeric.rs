//! Numeric normalization utilities.

use thiserror::Error;

/// Why a measurement string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeasurementError {
    #[error("value is empty")]
    Empty,
    #[error("value is not a whole number")]
    NotAWholeNumber,
    #[error("value is not positive")]
    NotPositive,
    #[error("value is too large")]
    TooLarge,
}

/// Parses a positive whole measurement such as a height or weight.
///
/// Leading and trailing whitespace is ignored. Signs are accepted so that
/// "-5" is reported as not positive rather than as malformed.
pub fn parse_positive_measurement(value: &str) -> Result<u32, MeasurementError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MeasurementError::Empty);
    }
    let number = match trimmed.parse::<i64>() {
        Ok(number) => number,
        Err(_) if is_signed_digits(trimmed) => {
            // Only overflow makes an all-digit string fail to parse.
            return Err(if trimmed.starts_with('-') {
                MeasurementError::NotPositive
            } else {
                MeasurementError::TooLarge
            });
        }
        Err(_) => return Err(MeasurementError::NotAWholeNumber),
    };
    if number <= 0 {
        return Err(MeasurementError::NotPositive);
    }
    u32::try_from(number).map_err(|_| MeasurementError::TooLarge)
}

fn is_signed_digits(value: &str) -> bool {
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}
