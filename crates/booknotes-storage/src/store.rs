//! [`BookStore`]: the owning store every mutation goes through.
//!
//! One `BookStore` is constructed per session over an injected backend; it
//! loads the persisted collection once and from then on is the collection's
//! sole owner. Every mutating operation re-validates, updates the in-memory
//! map, and flushes the whole collection before returning.
//!
//! Flush failures surface to the caller but are not rolled back: the
//! in-memory mutation stands with unflushed durability. This is a
//! best-effort local cache semantic, not a transactional guarantee.

use indexmap::IndexMap;

use booknotes_core::{codec, Book, BookDraft, BookPatch, ImportOutcome};

use crate::error::StorageError;
use crate::persist;
use crate::traits::LocalStore;

/// The authoritative in-memory collection plus its persistence backend.
///
/// The collection is a map keyed by record id; iteration order is insertion
/// order, which is what makes stable-sort guarantees observable downstream.
pub struct BookStore<S: LocalStore> {
    backend: S,
    books: IndexMap<String, Book>,
}

impl<S: LocalStore> BookStore<S> {
    /// Opens a store over `backend`, loading any persisted collection.
    ///
    /// Load-time repairs (missing ids, missing timestamps) are in-memory
    /// only until the next mutation flushes.
    pub fn open(backend: S) -> Result<Self, StorageError> {
        let loaded = persist::load(&backend)?;
        let mut books = IndexMap::with_capacity(loaded.len());
        for book in loaded {
            books.insert(book.id.clone(), book);
        }
        Ok(BookStore { backend, books })
    }

    /// Returns all records in insertion order. Pure read.
    pub fn list(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.get(id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Validates the draft, inserts the new record, and flushes.
    pub fn create(&mut self, draft: BookDraft) -> Result<Book, StorageError> {
        let book = Book::create(draft)?;
        self.books.insert(book.id.clone(), book.clone());
        self.flush()?;
        Ok(book)
    }

    /// Merges `patch` over the record with `id`, re-validates, and flushes.
    ///
    /// Fails with [`StorageError::BookNotFound`] for an unknown id, and with
    /// a validation error (stored record untouched) when the merged result
    /// is invalid.
    pub fn update(&mut self, id: &str, patch: BookPatch) -> Result<Book, StorageError> {
        let existing = self.books.get(id).ok_or_else(|| StorageError::BookNotFound {
            id: id.to_string(),
        })?;
        let updated = existing.apply_patch(patch)?;
        self.books.insert(id.to_string(), updated.clone());
        self.flush()?;
        Ok(updated)
    }

    /// Removes the record with `id` if present.
    ///
    /// Missing ids are a no-op returning `Ok(false)` — unlike `update`, which
    /// errors. Flushes only when something was actually removed.
    pub fn delete(&mut self, id: &str) -> Result<bool, StorageError> {
        if self.books.shift_remove(id).is_none() {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    /// Removes every record and returns how many were removed.
    ///
    /// An already-empty collection is a true no-op: no flush, `Ok(0)`.
    pub fn clear(&mut self) -> Result<usize, StorageError> {
        if self.books.is_empty() {
            return Ok(0);
        }
        let removed = self.books.len();
        self.books.clear();
        self.flush()?;
        Ok(removed)
    }

    /// Parses an import document and appends every accepted record.
    ///
    /// All-or-nothing at the document level; record-level filtering within a
    /// valid document is partial by design. Accepted records are flushed as
    /// one batch.
    pub fn import(&mut self, text: &str) -> Result<ImportOutcome, StorageError> {
        let outcome = codec::parse_import(text)?;
        for book in &outcome.accepted {
            self.books.insert(book.id.clone(), book.clone());
        }
        self.flush()?;
        Ok(outcome)
    }

    /// Builds the portable export document over the current collection.
    pub fn export(&self) -> Result<String, StorageError> {
        Ok(codec::export_document(&self.list())?)
    }

    /// Consumes the store, returning the backend.
    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Writes the whole collection through the persistence adapter.
    fn flush(&mut self) -> Result<(), StorageError> {
        let books: Vec<Book> = self.books.values().cloned().collect();
        persist::save(&mut self.backend, &books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use booknotes_core::{library_stats, ValidationError};
    use chrono::NaiveDate;

    fn draft(title: &str, rating: u8) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: "Herbert".to_string(),
            isbn: String::new(),
            date_read: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            rating,
            notes: String::new(),
            cover_url: None,
        }
    }

    fn open_empty() -> BookStore<MemoryStore> {
        BookStore::open(MemoryStore::new()).unwrap()
    }

    #[test]
    fn create_then_get_returns_the_record() {
        let mut store = open_empty();
        let book = store.create(draft("Dune", 5)).unwrap();
        assert_eq!(store.get(&book.id), Some(&book));
        assert_eq!(store.list(), vec![book]);
    }

    #[test]
    fn create_updates_stats() {
        let mut store = open_empty();
        store.create(draft("Dune", 5)).unwrap();
        let stats = library_stats(&store.list());
        assert_eq!(stats.count, 1);
        assert_eq!(stats.average_rating, 5.0);
    }

    #[test]
    fn invalid_create_leaves_collection_empty() {
        let mut store = open_empty();
        let err = store.create(draft("Dune", 6)).unwrap_err();
        assert!(matches!(
            err,
            StorageError::Validation(ValidationError::RatingOutOfRange { rating: 6 })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn update_with_empty_patch_is_identity() {
        let mut store = open_empty();
        let book = store.create(draft("Dune", 5)).unwrap();
        let updated = store.update(&book.id, BookPatch::default()).unwrap();
        assert_eq!(updated, book);
        assert_eq!(store.get(&book.id), Some(&book));
    }

    #[test]
    fn update_unknown_id_errors() {
        let mut store = open_empty();
        assert!(matches!(
            store.update("ghost", BookPatch::default()),
            Err(StorageError::BookNotFound { .. })
        ));
    }

    #[test]
    fn failed_update_validation_keeps_stored_record() {
        let mut store = open_empty();
        let book = store.create(draft("Dune", 5)).unwrap();
        let patch = BookPatch {
            rating: Some(9),
            ..BookPatch::default()
        };
        assert!(store.update(&book.id, patch).is_err());
        assert_eq!(store.get(&book.id).unwrap().rating, 5);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = open_empty();
        let book = store.create(draft("Dune", 5)).unwrap();
        assert!(store.delete(&book.id).unwrap());
        assert!(!store.delete(&book.id).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn clear_returns_removed_count_and_noops_when_empty() {
        let mut store = open_empty();
        assert_eq!(store.clear().unwrap(), 0);
        store.create(draft("A", 3)).unwrap();
        store.create(draft("B", 4)).unwrap();
        assert_eq!(store.clear().unwrap(), 2);
        assert_eq!(store.clear().unwrap(), 0);
    }

    #[test]
    fn mutations_persist_across_reopen() {
        let mut store = open_empty();
        let created = store.create(draft("Dune", 5)).unwrap();

        let backend = store.into_backend();
        let reopened = BookStore::open(backend).unwrap();
        assert_eq!(reopened.list(), vec![created]);
    }

    #[test]
    fn flush_failure_surfaces_but_memory_keeps_the_mutation() {
        // Quota too small for any collection blob: the write fails, the
        // in-memory record stays (best-effort semantics, no rollback).
        let mut store = BookStore::open(MemoryStore::with_quota(16)).unwrap();
        let err = store.create(draft("Dune", 5)).unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn import_appends_to_existing_collection() {
        let mut store = open_empty();
        store.create(draft("Existing", 4)).unwrap();
        let outcome = store
            .import(r#"{"books":[{"title":"A","author":"B","dateRead":"2024-01-01","rating":3}]}"#)
            .unwrap();
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(store.len(), 2);
        let titles: Vec<String> = store.list().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["Existing".to_string(), "A".to_string()]);
    }

    #[test]
    fn malformed_import_changes_nothing() {
        let mut store = open_empty();
        store.create(draft("Existing", 4)).unwrap();
        assert!(store.import("not json").is_err());
        assert!(store.import(r#"{"books": []}"#).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn export_round_trips_through_import() {
        let mut store = open_empty();
        store.create(draft("Dune", 5)).unwrap();
        store.create(draft("Piranesi", 4)).unwrap();
        let doc = store.export().unwrap();

        let mut other = open_empty();
        let outcome = other.import(&doc).unwrap();
        assert_eq!(outcome.accepted.len(), 2);
        let titles: Vec<String> = other.list().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["Dune".to_string(), "Piranesi".to_string()]);
    }
}
