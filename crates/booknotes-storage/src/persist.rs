//! The persistence adapter: collection blob load/save over a [`LocalStore`].
//!
//! The persisted shape is the bare JSON array of records under one fixed
//! key; there is no version envelope (the export document has one, the
//! persisted state does not). Loading tolerates two kinds of damage:
//!
//! - a missing key is the normal first-run state and loads as empty;
//! - an unreadable value is logged and discarded, because the application
//!   must stay usable even when the stored blob is corrupt.
//!
//! Records written by older schema versions may lack `id` or `createdAt`;
//! both are repaired on load. Repairs live in memory only until the next
//! mutation flushes the collection.

use booknotes_core::{generate_id, Book};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::error::StorageError;
use crate::traits::LocalStore;

/// Fixed storage key the serialized collection lives under.
pub const STORAGE_KEY: &str = "bookNotesApp";

/// Stored record shape: `id` and `createdAt` are optional for
/// backward compatibility and repaired on load.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredBook {
    #[serde(default)]
    id: Option<String>,
    title: String,
    author: String,
    #[serde(default)]
    isbn: String,
    date_read: NaiveDate,
    rating: u8,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    cover_url: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl StoredBook {
    fn into_book(self) -> Book {
        Book {
            id: self.id.unwrap_or_else(generate_id),
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            date_read: self.date_read,
            rating: self.rating,
            notes: self.notes,
            cover_url: self.cover_url,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Loads the collection from the store.
///
/// Backend read failures propagate; corrupt data does not — it is logged
/// and replaced with an empty collection.
pub fn load(store: &impl LocalStore) -> Result<Vec<Book>, StorageError> {
    let raw = match store.get_item(STORAGE_KEY)? {
        Some(raw) => raw,
        None => return Ok(Vec::new()), // first run
    };
    match decode_books(&raw) {
        Ok(books) => Ok(books),
        Err(err) => {
            tracing::warn!("discarding unreadable book data: {}", err);
            Ok(Vec::new())
        }
    }
}

/// Decodes and repairs a serialized collection blob.
pub(crate) fn decode_books(raw: &str) -> Result<Vec<Book>, StorageError> {
    let stored: Vec<StoredBook> =
        serde_json::from_str(raw).map_err(StorageError::CorruptData)?;
    Ok(stored.into_iter().map(StoredBook::into_book).collect())
}

/// Serializes the full collection and overwrites the stored blob.
///
/// Write rejection (quota, backend failure) surfaces to the caller; it is
/// never swallowed, because silent data loss must stay visible.
pub fn save(store: &mut impl LocalStore, books: &[Book]) -> Result<(), StorageError> {
    let raw = serde_json::to_string(books).map_err(StorageError::Serialization)?;
    store.set_item(STORAGE_KEY, &raw)
}
