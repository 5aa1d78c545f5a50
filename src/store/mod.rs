//! User-record store
//!
//! Defines the storage contract the guard writes to and reads from, plus an
//! in-memory implementation for demos and tests.

pub mod memory;

pub use memory::InMemoryUserStore;

use crate::error::StoreError;
use crate::guard::CredentialRecord;

/// Storage contract for credential records.
///
/// Implementations must enforce email uniqueness atomically inside
/// `insert`: the duplicate check and the write happen under the same
/// guard, so two racing registrations of one email can never both succeed.
/// Takes `&self` so one store can be shared across request threads;
/// interior locking is the implementation's business.
pub trait UserStore {
    /// Insert a new record, failing with `StoreError::DuplicateEmail` if a
    /// record with the same email already exists.
    fn insert(&self, record: CredentialRecord) -> Result<(), StoreError>;

    /// Look up a record by exact match on the normalized email.
    ///
    /// `Ok(None)` means no such record; `Err` is reserved for the store
    /// itself being unreachable.
    fn find_by_email(&self, email: &str) -> Result<Option<CredentialRecord>, StoreError>;
}
