use log::{debug, info, warn};

use crate::config::GuardConfig;
use crate::error::ValidationError;
use crate::error::handlers::log_rejection;
use crate::guard::record::{CredentialRecord, RegistrationRequest};
use crate::hashing::{fallback_hash, hash_password, verify_password};
use crate::sanitize::{normalize_email, sanitize_field};
use crate::store::UserStore;
use crate::validation::{validate_email, validate_password_strength};

/// Validates, normalizes, hashes, and verifies user credentials.
///
/// Holds the user-record store and the policy configuration and nothing
/// else; both operations take `&self` and leave the guard untouched, so one
/// instance can serve concurrent requests whenever the store allows it.
pub struct CredentialGuard<S: UserStore> {
    store: S,
    config: GuardConfig,
}

impl<S: UserStore> CredentialGuard<S> {
    /// Create a guard over `store` with the default policy.
    pub fn new(store: S) -> Self {
        Self::with_config(store, GuardConfig::default())
    }

    /// Create a guard with an explicit policy configuration.
    pub fn with_config(store: S, config: GuardConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a new account from raw form input.
    ///
    /// Sanitizes every field, validates the email and the password
    /// strength, hashes the password, and inserts the resulting record.
    /// The single store write on success is the only side effect; every
    /// failure path leaves the store untouched and is logged before it is
    /// returned.
    pub fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<CredentialRecord, ValidationError> {
        match self.process_registration(request) {
            Ok(record) => {
                info!("Registered account {}", record.email());
                Ok(record)
            }
            Err(err) => {
                log_rejection(&err);
                Err(err)
            }
        }
    }

    fn process_registration(
        &self,
        request: RegistrationRequest,
    ) -> Result<CredentialRecord, ValidationError> {
        // 1. Sanitize all fields before looking at any of them
        let email = normalize_email(&request.email);
        let name = sanitize_field(&request.name);
        let address = sanitize_field(&request.address);
        let password = request.password.trim();

        // 2. Email syntax
        validate_email(&email, &self.config)?;

        // 3. Password strength, checked on the plaintext before hashing
        validate_password_strength(password, &self.config)?;
        debug!("Registration input passed validation for {}", email);

        // 4. Hash; the plaintext goes no further than this call
        let password_hash =
            hash_password(password).map_err(|e| ValidationError::Hashing(e.to_string()))?;

        // 5. Persist; the store's atomic uniqueness check arbitrates duplicates
        let record = CredentialRecord::new(email, password_hash, name, address);
        self.store.insert(record.clone())?;

        Ok(record)
    }

    /// Check a login attempt against the stored credential record.
    ///
    /// Returns `Ok(true)` or `Ok(false)` for a known email depending on
    /// whether the password matches, `Err(UnknownUser)` for an unknown one.
    /// The password check runs through the hash verifier in both cases (a
    /// throwaway hash stands in when no record exists), so a miss is not
    /// observably faster than a mismatch. Never mutates any state.
    pub fn verify(&self, email: &str, password: &str) -> Result<bool, ValidationError> {
        let email = normalize_email(email);
        let password = password.trim();

        match self.store.find_by_email(&email) {
            Ok(Some(record)) => {
                let matched = verify_password(password, record.password_hash());
                if matched {
                    info!("Verified login for {}", email);
                } else {
                    warn!("Password mismatch for {}", email);
                }
                Ok(matched)
            }
            Ok(None) => {
                let _ = verify_password(password, fallback_hash());
                warn!("Login attempt for unknown email {}", email);
                Err(ValidationError::UnknownUser)
            }
            Err(err) => {
                let err = ValidationError::from(err);
                log_rejection(&err);
                Err(err)
            }
        }
    }
}
