//! Password hashing
//!
//! Wraps Argon2id hashing and verification. Hashes are PHC-format strings
//! carrying their own salt and parameters; comparison always goes through
//! the verifier, never string equality.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::LazyLock;

/// Hash burned on lookups that miss, so an unknown email costs the caller
/// one full verification just like a wrong password does.
static FALLBACK_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("throwaway-fallback-1").unwrap_or_default());

/// Hash a plaintext password with Argon2id and a fresh random salt.
///
/// Returns the PHC-format string (`$argon2id$v=19$...`) to be stored in the
/// credential record. The plaintext is not retained.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// A hash that fails to parse counts as a mismatch; verification never
/// panics on stored data.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// The process-wide throwaway hash used to equalize verify misses.
pub(crate) fn fallback_hash() -> &'static str {
    FALLBACK_HASH.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = hash_password("StrongPass123").unwrap();
        assert!(verify_password("StrongPass123", &hash));
        assert!(!verify_password("WrongPass123", &hash));
    }

    #[test]
    fn test_hash_is_opaque() {
        let hash = hash_password("StrongPass123").unwrap();
        assert_ne!(hash, "StrongPass123");
        assert!(!hash.contains("StrongPass123"));
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Fresh salt per call
        let first = hash_password("StrongPass123").unwrap();
        let second = hash_password("StrongPass123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch() {
        assert!(!verify_password("StrongPass123", "not-a-phc-string"));
        assert!(!verify_password("StrongPass123", ""));
    }

    #[test]
    fn test_fallback_hash_is_usable() {
        assert!(fallback_hash().starts_with("$argon2id$"));
        assert!(!verify_password("anything-at-all-9", fallback_hash()));
    }
}
