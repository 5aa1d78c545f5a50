//! Error types
//!
//! Defines domain-specific error types for credential validation and the
//! user-record store.

use std::fmt;

/// Credential guard errors
///
/// Every variant is a recoverable outcome surfaced to the caller; none of
/// them represent a crash. `UnknownUser` deliberately carries no payload so
/// that no code path can echo which email failed to resolve.
#[derive(Debug)]
pub enum ValidationError {
    InvalidEmail(String),
    WeakPassword(String),
    DuplicateEmail(String),
    UnknownUser,
    StoreUnavailable(String),
    Hashing(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidEmail(e) => write!(f, "Invalid email address: {}", e),
            ValidationError::WeakPassword(reason) => write!(f, "Weak password: {}", reason),
            ValidationError::DuplicateEmail(e) => write!(f, "Email already registered: {}", e),
            ValidationError::UnknownUser => write!(f, "No account for the supplied email"),
            ValidationError::StoreUnavailable(msg) => write!(f, "User store unavailable: {}", msg),
            ValidationError::Hashing(msg) => write!(f, "Password hashing failed: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

/// User-record store errors
#[derive(Debug)]
pub enum StoreError {
    DuplicateEmail(String),
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateEmail(e) => write!(f, "Email already registered: {}", e),
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// Implement conversion from store errors to guard errors
impl From<StoreError> for ValidationError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::DuplicateEmail(email) => ValidationError::DuplicateEmail(email),
            StoreError::Unavailable(msg) => ValidationError::StoreUnavailable(msg),
        }
    }
}
