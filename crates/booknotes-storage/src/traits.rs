//! The [`LocalStore`] trait defining the key-value contract for backends.
//!
//! The contract is deliberately small: opaque string values under string
//! keys, read and overwritten synchronously. The trait is synchronous (not
//! async) because the data layer runs single-threaded and every operation
//! completes or fails before returning. All backends implement this trait,
//! making them fully swappable without changing the collection logic.

use crate::error::StorageError;

/// Synchronous string key-value storage.
pub trait LocalStore {
    /// Reads the value stored under `key`, if any.
    ///
    /// An absent key is `Ok(None)`, not an error.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, fully overwriting any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
