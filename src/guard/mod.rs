//! Credential guard
//!
//! The registration/login core: sanitizes untrusted form input, validates
//! it, hashes passwords, and reads/writes the user-record store.

pub mod core;
pub mod record;

pub use core::CredentialGuard;
pub use record::{CredentialRecord, RegistrationRequest};
