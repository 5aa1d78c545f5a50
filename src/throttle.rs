//! Login throttling
//!
//! Sliding-window failed-login tracking keyed by normalized email. Lives
//! beside the guard rather than inside it: verify never mutates state, so
//! callers wanting lockout consult the throttle before verifying and feed
//! it each outcome. Each method normalizes its email argument, so raw form
//! input and the canonical address land on the same count.

use log::warn;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::config::GuardConfig;
use crate::sanitize::normalize_email;

/// Failed-login throttle
pub struct LoginThrottle {
    failures: HashMap<String, Vec<Instant>>,
    max_failures: usize,
    window: Duration,
}

impl LoginThrottle {
    pub fn new(max_failures: usize, window: Duration) -> Self {
        Self {
            failures: HashMap::new(),
            max_failures,
            window,
        }
    }

    /// Build a throttle from the guard configuration.
    pub fn from_config(config: &GuardConfig) -> Self {
        Self::new(config.throttle_max_failures, config.throttle_window())
    }

    /// Whether the account has used up its allowed failures inside the window.
    pub fn is_locked(&mut self, email: &str) -> bool {
        let email = normalize_email(email);
        let now = Instant::now();
        if let Some(entry) = self.failures.get_mut(&email) {
            // Drop failures that have aged out
            entry.retain(|&time| now.duration_since(time) <= self.window);
            if !entry.is_empty() {
                return entry.len() >= self.max_failures;
            }
            // Every failure aged out; drop the key too
            self.failures.remove(&email);
        }
        false
    }

    /// Record one failed login attempt.
    pub fn record_failure(&mut self, email: &str) {
        let email = normalize_email(email);
        let now = Instant::now();
        let entry = self.failures.entry(email.clone()).or_insert_with(Vec::new);

        entry.retain(|&time| now.duration_since(time) <= self.window);
        entry.push(now);

        if entry.len() >= self.max_failures {
            warn!(
                "Account locked after {} failed logins: {}",
                entry.len(),
                email
            );
        }
    }

    /// Forget an account's failures, typically after a successful login.
    pub fn clear(&mut self, email: &str) {
        self.failures.remove(&normalize_email(email));
    }

    /// Number of accounts with recorded failures.
    pub fn tracked_accounts(&self) -> usize {
        self.failures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locks_after_max_failures() {
        let mut throttle = LoginThrottle::new(3, Duration::from_secs(60));

        assert!(!throttle.is_locked("test@example.com"));
        throttle.record_failure("test@example.com");
        throttle.record_failure("test@example.com");
        assert!(!throttle.is_locked("test@example.com"));

        throttle.record_failure("test@example.com");
        assert!(throttle.is_locked("test@example.com"));
    }

    #[test]
    fn test_accounts_are_tracked_independently() {
        let mut throttle = LoginThrottle::new(1, Duration::from_secs(60));
        throttle.record_failure("locked@example.com");

        assert!(throttle.is_locked("locked@example.com"));
        assert!(!throttle.is_locked("other@example.com"));
    }

    #[test]
    fn test_clear_unlocks() {
        let mut throttle = LoginThrottle::new(1, Duration::from_secs(60));
        throttle.record_failure("test@example.com");
        assert!(throttle.is_locked("test@example.com"));

        throttle.clear("test@example.com");
        assert!(!throttle.is_locked("test@example.com"));
    }

    #[test]
    fn test_failures_age_out_of_the_window() {
        let mut throttle = LoginThrottle::new(1, Duration::from_millis(40));
        throttle.record_failure("test@example.com");
        assert!(throttle.is_locked("test@example.com"));

        std::thread::sleep(Duration::from_millis(60));
        assert!(!throttle.is_locked("test@example.com"));
    }

    #[test]
    fn test_case_variants_count_against_one_account() {
        let mut throttle = LoginThrottle::new(3, Duration::from_secs(60));
        throttle.record_failure("Victim@example.com");
        throttle.record_failure("VICTIM@EXAMPLE.COM");
        throttle.record_failure(" victim@Example.com ");

        assert!(throttle.is_locked("victim@example.com"));
        assert!(throttle.is_locked("Victim@EXAMPLE.com"));

        throttle.clear("VICTIM@example.COM");
        assert!(!throttle.is_locked("victim@example.com"));
    }

    #[test]
    fn test_aged_out_accounts_are_dropped() {
        let mut throttle = LoginThrottle::new(1, Duration::from_millis(40));
        throttle.record_failure("one@example.com");
        throttle.record_failure("two@example.com");
        assert_eq!(throttle.tracked_accounts(), 2);

        std::thread::sleep(Duration::from_millis(60));
        assert!(!throttle.is_locked("one@example.com"));
        assert!(!throttle.is_locked("two@example.com"));
        assert_eq!(throttle.tracked_accounts(), 0);
    }

    #[test]
    fn test_from_config_uses_policy_values() {
        let config = GuardConfig::default();
        let mut throttle = LoginThrottle::from_config(&config);

        for _ in 0..config.throttle_max_failures {
            throttle.record_failure("test@example.com");
        }
        assert!(throttle.is_locked("test@example.com"));
    }
}
