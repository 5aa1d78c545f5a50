//! In-memory user-record store
//!
//! HashMap-backed reference implementation of the store contract. A single
//! mutex makes the duplicate check and the insert one atomic step.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StoreError;
use crate::guard::CredentialRecord;
use crate::store::UserStore;

/// Mutex-guarded map from normalized email to credential record.
pub struct InMemoryUserStore {
    records: Mutex<HashMap<String, CredentialRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, record: CredentialRecord) -> Result<(), StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("user store lock poisoned".to_string()))?;

        if records.contains_key(record.email()) {
            return Err(StoreError::DuplicateEmail(record.email().to_string()));
        }

        records.insert(record.email().to_string(), record);
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<CredentialRecord>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("user store lock poisoned".to_string()))?;

        Ok(records.get(email).cloned())
    }
}
