//! Credential validation rules
//!
//! Named, independently testable predicates for email syntax and password
//! strength. The rules live apart from guard control flow so a pattern
//! change never touches the register/verify operations.

pub mod email;
pub mod password;

// Re-export the validation entry points used by the guard
pub use email::{is_valid_email, validate_email};
pub use password::validate_password_strength;
