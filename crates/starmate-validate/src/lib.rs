//! Form validation for the profile, login and register screens.
//!
//! Validators run independently and every failing field is reported at once.
//! Nothing in this crate performs I/O or knows about sessions.

pub mod credentials;
pub mod fields;
pub mod form;
mod options;

pub use credentials::{validate_login, validate_register};
pub use form::{validate_interests_form, validate_profile};
pub use options::{DEFAULT_MAX_USERNAME_LENGTH, DEFAULT_MIN_PASSWORD_LENGTH, ValidationOptions};
