//! Credential validation and storage core for the bookstore's
//! registration and login flow.

pub mod config;
pub mod error;
pub mod guard;
pub mod hashing;
pub mod sanitize;
pub mod store;
pub mod throttle;
pub mod validation;

pub use config::GuardConfig;
pub use error::{StoreError, ValidationError};
pub use guard::{CredentialGuard, CredentialRecord, RegistrationRequest};
pub use store::{InMemoryUserStore, UserStore};
pub use throttle::LoginThrottle;
