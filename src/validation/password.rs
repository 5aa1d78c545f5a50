//! Password strength validation
//!
//! One predicate per rule; `validate_password_strength` reports the first
//! broken rule. Passwords are checked in plaintext before hashing and are
//! never sanitized, since they are never rendered.

use crate::config::GuardConfig;
use crate::error::ValidationError;

/// Returns whether the password has at least `min` characters.
pub fn meets_minimum_length(password: &str, min: usize) -> bool {
    password.chars().count() >= min
}

/// Returns whether the password stays within `max` characters.
///
/// The cap bounds the hashing cost of attacker-supplied input.
pub fn within_maximum_length(password: &str, max: usize) -> bool {
    password.chars().count() <= max
}

/// Returns whether the password contains at least one ASCII letter.
pub fn has_letter(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_alphabetic())
}

/// Returns whether the password contains at least one ASCII digit.
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Validates password strength against the configured policy.
pub fn validate_password_strength(
    password: &str,
    config: &GuardConfig,
) -> Result<(), ValidationError> {
    if !meets_minimum_length(password, config.min_password_length) {
        return Err(ValidationError::WeakPassword(format!(
            "must be at least {} characters long",
            config.min_password_length
        )));
    }

    if !within_maximum_length(password, config.max_password_length) {
        return Err(ValidationError::WeakPassword(format!(
            "must be at most {} characters long",
            config.max_password_length
        )));
    }

    if !has_letter(password) {
        return Err(ValidationError::WeakPassword(
            "must contain at least one letter".to_string(),
        ));
    }

    if !has_digit(password) {
        return Err(ValidationError::WeakPassword(
            "must contain at least one digit".to_string(),
        ));
    }

    Ok(())
}
