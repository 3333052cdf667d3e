//! The [`Book`] record and its validated construction paths.
//!
//! A `Book` enters the collection either through [`Book::create`] (from a
//! [`BookDraft`]) or through the import codec; it is modified only by merging
//! a [`BookPatch`] over an existing record via [`Book::apply_patch`]. Both
//! paths enforce the same rules: non-empty title and author, rating in 1..=5.
//! `id` and `created_at` are assigned once and never change afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::cover::resolve_cover_url;
use crate::error::ValidationError;
use crate::id::generate_id;

/// Lowest rating accepted by the validated entry points.
pub const RATING_MIN: u8 = 1;
/// Highest rating accepted by the validated entry points.
pub const RATING_MAX: u8 = 5;

/// One read book and its metadata.
///
/// Wire names are camelCase (`dateRead`, `coverUrl`, `createdAt`) to match
/// the persisted and exported formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique within the collection, immutable after creation.
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    /// Calendar date the book was finished, serialized `YYYY-MM-DD`.
    pub date_read: NaiveDate,
    pub rating: u8,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// Set once at creation, never modified thereafter.
    pub created_at: DateTime<Utc>,
}

/// Input fields for creating a new [`Book`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    pub date_read: NaiveDate,
    pub rating: u8,
    #[serde(default)]
    pub notes: String,
    /// Explicit cover URL; derived from the ISBN when absent.
    #[serde(default)]
    pub cover_url: Option<String>,
}

/// A partial update: `None` fields retain the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub date_read: Option<NaiveDate>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
}

impl Book {
    /// Builds a new record from a draft: validates, assigns a fresh `id` and
    /// `created_at`, trims text fields, and derives the cover URL from the
    /// ISBN when none was supplied.
    pub fn create(draft: BookDraft) -> Result<Book, ValidationError> {
        validate(&draft.title, &draft.author, draft.rating)?;
        let isbn = draft.isbn.trim().to_string();
        let cover_url = draft
            .cover_url
            .unwrap_or_else(|| resolve_cover_url(&isbn));
        Ok(Book {
            id: generate_id(),
            title: draft.title.trim().to_string(),
            author: draft.author.trim().to_string(),
            isbn,
            date_read: draft.date_read,
            rating: draft.rating,
            notes: draft.notes.trim().to_string(),
            cover_url: Some(cover_url),
            created_at: Utc::now(),
        })
    }

    /// Merges a patch over this record and re-validates the result.
    ///
    /// Returns the merged record without touching `self`; `id` and
    /// `created_at` are always carried over unchanged. On validation failure
    /// the stored record stays as it was.
    pub fn apply_patch(&self, patch: BookPatch) -> Result<Book, ValidationError> {
        let mut merged = self.clone();
        if let Some(title) = patch.title {
            merged.title = title.trim().to_string();
        }
        if let Some(author) = patch.author {
            merged.author = author.trim().to_string();
        }
        if let Some(isbn) = patch.isbn {
            merged.isbn = isbn.trim().to_string();
        }
        if let Some(date_read) = patch.date_read {
            merged.date_read = date_read;
        }
        if let Some(rating) = patch.rating {
            merged.rating = rating;
        }
        if let Some(notes) = patch.notes {
            merged.notes = notes.trim().to_string();
        }
        if let Some(cover_url) = patch.cover_url {
            merged.cover_url = Some(cover_url);
        }
        validate(&merged.title, &merged.author, merged.rating)?;
        Ok(merged)
    }
}

/// Shared validation rule for `create` and `update`.
fn validate(title: &str, author: &str, rating: u8) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "title" });
    }
    if author.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "author" });
    }
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(ValidationError::RatingOutOfRange { rating });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BookDraft {
        BookDraft {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "9780441013593".to_string(),
            date_read: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            rating: 5,
            notes: String::new(),
            cover_url: None,
        }
    }

    #[test]
    fn create_assigns_id_and_created_at() {
        let book = Book::create(draft()).unwrap();
        assert!(!book.id.is_empty());
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.rating, 5);
    }

    #[test]
    fn create_derives_cover_url_from_isbn() {
        let book = Book::create(draft()).unwrap();
        assert_eq!(
            book.cover_url.as_deref(),
            Some("https://covers.openlibrary.org/b/isbn/9780441013593-M.jpg")
        );
    }

    #[test]
    fn create_keeps_supplied_cover_url() {
        let mut d = draft();
        d.cover_url = Some("https://example.com/cover.jpg".to_string());
        let book = Book::create(d).unwrap();
        assert_eq!(book.cover_url.as_deref(), Some("https://example.com/cover.jpg"));
    }

    #[test]
    fn create_without_isbn_uses_placeholder_cover() {
        let mut d = draft();
        d.isbn = String::new();
        let book = Book::create(d).unwrap();
        assert_eq!(book.cover_url.as_deref(), Some(crate::cover::DEFAULT_COVER_URL));
    }

    #[test]
    fn create_trims_text_fields() {
        let mut d = draft();
        d.title = "  Dune ".to_string();
        d.notes = " great read ".to_string();
        let book = Book::create(d).unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.notes, "great read");
    }

    #[test]
    fn create_rejects_blank_title() {
        let mut d = draft();
        d.title = "   ".to_string();
        let err = Book::create(d).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "title" }));
    }

    #[test]
    fn create_rejects_out_of_range_rating() {
        for rating in [0, 6] {
            let mut d = draft();
            d.rating = rating;
            let err = Book::create(d).unwrap_err();
            assert!(matches!(err, ValidationError::RatingOutOfRange { .. }));
        }
    }

    #[test]
    fn empty_patch_leaves_record_unchanged() {
        let book = Book::create(draft()).unwrap();
        let merged = book.apply_patch(BookPatch::default()).unwrap();
        assert_eq!(merged, book);
    }

    #[test]
    fn patch_preserves_id_and_created_at() {
        let book = Book::create(draft()).unwrap();
        let patch = BookPatch {
            title: Some("Dune Messiah".to_string()),
            rating: Some(4),
            ..BookPatch::default()
        };
        let merged = book.apply_patch(patch).unwrap();
        assert_eq!(merged.id, book.id);
        assert_eq!(merged.created_at, book.created_at);
        assert_eq!(merged.title, "Dune Messiah");
        assert_eq!(merged.rating, 4);
        assert_eq!(merged.author, "Herbert");
    }

    #[test]
    fn patch_with_bad_rating_is_rejected() {
        let book = Book::create(draft()).unwrap();
        let patch = BookPatch {
            rating: Some(6),
            ..BookPatch::default()
        };
        assert!(matches!(
            book.apply_patch(patch),
            Err(ValidationError::RatingOutOfRange { rating: 6 })
        ));
    }

    #[test]
    fn book_serializes_with_camel_case_wire_names() {
        let book = Book::create(draft()).unwrap();
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains("\"dateRead\":\"2024-01-01\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"coverUrl\""));

        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}
