//! Storage error types for booknotes-storage.
//!
//! [`StorageError`] covers all anticipated failure modes in the storage
//! layer: validation and codec failures bubbling up from the core crate,
//! lookup misses, serialization, backend write rejection, and corrupt
//! persisted data.

use booknotes_core::{CodecError, ValidationError};
use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A record failed validation; the mutation was rejected.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An import/export document could not be processed.
    #[error("import/export error: {0}")]
    Codec(#[from] CodecError),

    /// An update referenced an id that is not in the collection.
    #[error("book not found: {id}")]
    BookNotFound { id: String },

    /// The collection could not be serialized for a flush.
    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),

    /// The persisted blob was present but unreadable. Recoverable: the
    /// loader discards it and starts with an empty collection.
    #[error("stored book data is corrupt: {0}")]
    CorruptData(serde_json::Error),

    /// The backend refused a write because the value exceeds its quota.
    #[error("storage quota exceeded: {attempted} bytes over a {limit} byte limit")]
    QuotaExceeded { attempted: usize, limit: usize },

    /// The SQLite backend failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Schema migration failed while opening a SQLite backend.
    #[error("migration error: {0}")]
    Migration(String),
}
