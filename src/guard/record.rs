//! Credential record and registration input
//!
//! Defines the stored representation of one user's login identity and the
//! raw form-input structure the guard consumes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One user's stored login identity.
///
/// Created exactly once, at registration, after every validation passed;
/// read on each login attempt and never mutated. The email is normalized
/// and unique within the store, the password hash is an opaque PHC string,
/// and the profile fields are sanitized display values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    email: String,
    password_hash: String,
    name: String,
    address: String,
}

impl CredentialRecord {
    pub(crate) fn new(email: String, password_hash: String, name: String, address: String) -> Self {
        Self {
            email,
            password_hash,
            name,
            address,
        }
    }

    /// Returns the normalized email, the record's unique key.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the PHC-format password hash.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns the sanitized display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sanitized address.
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Raw, untrusted registration input as submitted by a form.
///
/// A field the form did not supply is the empty string. Nothing here is
/// sanitized or validated yet; the guard does both.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub address: String,
}

impl RegistrationRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            address: address.into(),
        }
    }
}

// The plaintext password must never reach logs, so Debug is hand-written
impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("address", &self.address)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_exposes_fields_through_getters() {
        let record = CredentialRecord::new(
            "test@example.com".to_string(),
            "$argon2id$stub".to_string(),
            "Test User".to_string(),
            "123 Test Street".to_string(),
        );
        assert_eq!(record.email(), "test@example.com");
        assert_eq!(record.password_hash(), "$argon2id$stub");
        assert_eq!(record.name(), "Test User");
        assert_eq!(record.address(), "123 Test Street");
    }

    #[test]
    fn test_request_debug_redacts_password() {
        let request = RegistrationRequest::new(
            "test@example.com",
            "StrongPass123",
            "Test User",
            "123 Test Street",
        );
        let printed = format!("{:?}", request);
        assert!(!printed.contains("StrongPass123"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("test@example.com"));
    }

    #[test]
    fn test_missing_form_fields_default_to_empty() {
        let request = RegistrationRequest::default();
        assert_eq!(request.email, "");
        assert_eq!(request.password, "");
        assert_eq!(request.name, "");
        assert_eq!(request.address, "");
    }
}
