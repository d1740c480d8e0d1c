//! Validation configuration shared by every form.

use chrono::{Local, NaiveDate};

/// Default minimum password length for both login and register.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Default maximum username length.
pub const DEFAULT_MAX_USERNAME_LENGTH: usize = 100;

/// Options controlling form validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Minimum password length in characters, used by login and register.
    pub min_password_length: usize,
    /// Maximum username length in characters.
    pub max_username_length: usize,
    /// Reference date for age and future-birthday checks.
    /// `None` means the local current date at validation time.
    pub today: Option<NaiveDate>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_username_length: DEFAULT_MAX_USERNAME_LENGTH,
            today: None,
        }
    }
}

impl ValidationOptions {
    /// Set the minimum password length.
    #[must_use]
    pub fn with_min_password_length(mut self, length: usize) -> Self {
        self.min_password_length = length;
        self
    }

    /// Pin the reference date instead of reading the clock.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Reference date used for this validation run.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
