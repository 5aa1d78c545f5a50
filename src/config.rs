//! Configuration management for the credential guard
//!
//! Policy knobs with shipped defaults, optionally overridden by a
//! `guard.toml` file and `CRED_GUARD_*` environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Guard policy configuration
///
/// Every field has a default matching the shipped `guard.toml`, so the
/// guard works without any configuration present.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GuardConfig {
    /// Minimum password length in characters
    pub min_password_length: usize,

    /// Maximum password length in characters (bounds hashing cost)
    pub max_password_length: usize,

    /// Maximum accepted email length in bytes
    pub max_email_length: usize,

    /// Failed logins tolerated inside the throttle window
    /// Environment: CRED_GUARD_THROTTLE_MAX_FAILURES
    pub throttle_max_failures: usize,

    /// Throttle window length in seconds
    /// Environment: CRED_GUARD_THROTTLE_WINDOW_SECS
    pub throttle_window_secs: u64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            min_password_length: 8,
            max_password_length: 128,
            max_email_length: 254,
            throttle_max_failures: 5,
            throttle_window_secs: 900,
        }
    }
}

impl GuardConfig {
    /// Load configuration from guard.toml with environment overrides.
    ///
    /// A missing file is not an error; defaults fill anything the file and
    /// the environment leave unset.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("guard").required(false))
            .add_source(Environment::with_prefix("CRED_GUARD"))
            .build()?;

        let config: GuardConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the throttle window as a Duration
    pub fn throttle_window(&self) -> Duration {
        Duration::from_secs(self.throttle_window_secs)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.min_password_length == 0 {
            return Err(config::ConfigError::Message(
                "min_password_length must be greater than 0".into(),
            ));
        }

        if self.max_password_length < self.min_password_length {
            return Err(config::ConfigError::Message(
                "max_password_length must not be less than min_password_length".into(),
            ));
        }

        if self.max_email_length == 0 {
            return Err(config::ConfigError::Message(
                "max_email_length must be greater than 0".into(),
            ));
        }

        if self.throttle_max_failures == 0 {
            return Err(config::ConfigError::Message(
                "throttle_max_failures must be greater than 0".into(),
            ));
        }

        if self.throttle_window_secs == 0 {
            return Err(config::ConfigError::Message(
                "throttle_window_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
