//! In-memory implementation of [`LocalStore`].
//!
//! [`MemoryStore`] is a first-class backend for tests and ephemeral sessions.
//! The optional write quota models the fixed storage limit a browser-style
//! key-value store imposes, which is what makes flush-failure paths testable.

use std::collections::HashMap;

use crate::error::StorageError;
use crate::traits::LocalStore;

/// HashMap-backed key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    /// Maximum accepted value size in bytes; `None` means unlimited.
    quota: Option<usize>,
}

impl MemoryStore {
    /// Creates an unbounded in-memory store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Creates a store that rejects values larger than `limit` bytes with
    /// [`StorageError::QuotaExceeded`].
    pub fn with_quota(limit: usize) -> Self {
        MemoryStore {
            items: HashMap::new(),
            quota: Some(limit),
        }
    }
}

impl LocalStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.quota {
            if value.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    attempted: value.len(),
                    limit,
                });
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
