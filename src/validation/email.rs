//! Email syntax validation
//!
//! Implements the documented address pattern as a compiled static so the
//! rule is checked the same way everywhere it is needed.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::GuardConfig;
use crate::error::ValidationError;

/// Syntactic email pattern: `local-part@domain.tld`.
///
/// The local part consists of letters, digits, and `. _ % + -`; the domain
/// of letters, digits, `.`, and `-`; the final label is two or more letters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern must compile")
});

/// Returns whether the input matches the documented email pattern.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates a normalized email address.
///
/// Expects input that already went through `sanitize::normalize_email`;
/// escaped markup fails the pattern here rather than reaching the store.
pub fn validate_email(email: &str, config: &GuardConfig) -> Result<(), ValidationError> {
    if email.is_empty() || email.len() > config.max_email_length {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}
