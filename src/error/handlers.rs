//! Error handlers
//!
//! Maps credential errors to log entries and presentation-safe messages.

use crate::error::types::ValidationError;
use log::warn;

/// Log a rejected credential operation
pub fn log_rejection(err: &ValidationError) {
    warn!("Credential operation rejected: {}", err);
}

/// Convert an error to the message a presentation layer may show.
///
/// Unknown accounts and failed password checks share one wording so the
/// response cannot reveal which emails are registered. Store and
/// hashing trouble collapse into a generic retry message that leaks nothing
/// about internal state.
pub fn user_message(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::InvalidEmail(_) => "Please enter a valid email address",
        ValidationError::WeakPassword(_) => "Password does not meet the strength requirements",
        ValidationError::DuplicateEmail(_) => "Email already registered",
        ValidationError::UnknownUser => "Invalid email or password",
        ValidationError::StoreUnavailable(_) | ValidationError::Hashing(_) => {
            "Service temporarily unavailable, please try again"
        }
    }
}
