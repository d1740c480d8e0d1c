//! Login and register form validation.

use starmate_model::{
    Credentials, Field, FormValidationError, LoginInput, RegisterInput, Registration,
};
use tracing::debug;

use crate::fields::{
    validate_email, validate_password, validate_password_confirmation, validate_username,
};
use crate::options::ValidationOptions;

/// Validate the login form.
pub fn validate_login(
    input: &LoginInput,
    options: &ValidationOptions,
) -> Result<Credentials, FormValidationError> {
    let mut errors = FormValidationError::new();
    let email = errors.check(Field::Email, validate_email(&input.email));
    let password = errors.check(
        Field::Password,
        validate_password(&input.password, options.min_password_length),
    );
    match (email, password) {
        (Some(email), Some(password)) => Ok(Credentials { email, password }),
        _ => {
            debug!(failed = errors.len(), "login form rejected");
            Err(errors)
        }
    }
}

/// Validate the register form.
///
/// The confirmation obeys the same length rule as the password; a mismatch
/// is reported on the confirmation field.
pub fn validate_register(
    input: &RegisterInput,
    options: &ValidationOptions,
) -> Result<Registration, FormValidationError> {
    let mut errors = FormValidationError::new();
    let email = errors.check(Field::Email, validate_email(&input.email));
    let username = errors.check(
        Field::Username,
        validate_username(&input.username, options.max_username_length),
    );
    let password = errors.check(
        Field::Password,
        validate_password(&input.password, options.min_password_length),
    );
    errors.check(
        Field::ConfirmPassword,
        validate_password(&input.confirm_password, options.min_password_length),
    );
    errors.check(
        Field::ConfirmPassword,
        validate_password_confirmation(&input.password, &input.confirm_password),
    );
    match (email, username, password) {
        (Some(email), Some(username), Some(password)) if errors.is_empty() => Ok(Registration {
            email,
            username,
            password,
        }),
        _ => {
            debug!(failed = errors.len(), "register form rejected");
            Err(errors)
        }
    }
}
