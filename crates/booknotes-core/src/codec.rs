//! Portable import/export of the collection.
//!
//! Export builds a versioned document wrapping the records; import parses
//! such a document leniently, filtering record-by-record instead of failing
//! the whole document over one bad entry. Imported records never keep their
//! source ids: every accepted record gets a fresh one so it cannot collide
//! with anything already in the collection.
//!
//! Import validation is deliberately weaker than `create` validation: it
//! checks that `title`, `author`, `dateRead`, and `rating` are present and
//! non-empty/nonzero, but does not enforce the 1..=5 rating range. A record
//! rated 9 imports as-is; a record rated 0 is rejected.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::book::Book;
use crate::cover::resolve_cover_url;
use crate::error::CodecError;
use crate::id::generate_id;

/// Version stamp written into every export document.
pub const EXPORT_VERSION: &str = "1.0";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    version: &'static str,
    export_date: DateTime<Utc>,
    books: &'a [Book],
}

/// Result of filtering an import document.
#[derive(Debug)]
pub struct ImportOutcome {
    /// Normalized records ready to append to the collection.
    pub accepted: Vec<Book>,
    /// Candidates dropped by record-level filtering.
    pub rejected: usize,
}

/// Serializes the records into the versioned export document.
///
/// Read-only with respect to the collection; the document carries the
/// current timestamp as `exportDate`.
pub fn export_document(books: &[Book]) -> Result<String, CodecError> {
    let doc = ExportDocument {
        version: EXPORT_VERSION,
        export_date: Utc::now(),
        books,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Candidate record as found in an import document. Everything is optional
/// here; the filter below decides what is acceptable. Source `id` fields are
/// ignored entirely.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportCandidate {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    isbn: Option<String>,
    #[serde(default)]
    date_read: Option<NaiveDate>,
    #[serde(default)]
    rating: Option<u8>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    cover_url: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

/// Parses an import document and filters its records.
///
/// Fails with [`CodecError::Json`] / [`CodecError::MissingBooks`] when the
/// document itself is malformed, and [`CodecError::EmptyImport`] when no
/// candidate survives filtering. Otherwise returns every accepted record
/// (fresh id, `createdAt` preserved or assigned, cover URL derived from a
/// non-empty ISBN when absent) plus the count of rejected candidates.
pub fn parse_import(text: &str) -> Result<ImportOutcome, CodecError> {
    let doc: Value = serde_json::from_str(text)?;
    let candidates = doc
        .get("books")
        .and_then(Value::as_array)
        .ok_or(CodecError::MissingBooks)?;

    let mut accepted = Vec::new();
    let mut rejected = 0;
    for raw in candidates {
        match normalize_candidate(raw) {
            Some(book) => accepted.push(book),
            None => rejected += 1,
        }
    }

    if accepted.is_empty() {
        return Err(CodecError::EmptyImport);
    }
    Ok(ImportOutcome { accepted, rejected })
}

/// Accepts a candidate iff title, author, dateRead, and rating are present
/// and non-empty/nonzero. Candidates whose fields cannot be read into the
/// typed record at all (rating not an integer, unparseable date) are
/// rejected the same way.
fn normalize_candidate(raw: &Value) -> Option<Book> {
    let candidate: ImportCandidate = serde_json::from_value(raw.clone()).ok()?;

    let title = candidate.title.filter(|t| !t.is_empty())?;
    let author = candidate.author.filter(|a| !a.is_empty())?;
    let date_read = candidate.date_read?;
    let rating = candidate.rating.filter(|&r| r != 0)?;

    let isbn = candidate.isbn.unwrap_or_default();
    // A missing cover URL is only derived when there is an ISBN to derive it
    // from; no placeholder is injected on import.
    let cover_url = candidate
        .cover_url
        .filter(|url| !url.is_empty())
        .or_else(|| {
            if isbn.is_empty() {
                None
            } else {
                Some(resolve_cover_url(&isbn))
            }
        });

    Some(Book {
        id: generate_id(),
        title,
        author,
        isbn,
        date_read,
        rating,
        notes: candidate.notes.unwrap_or_default(),
        cover_url,
        created_at: candidate.created_at.unwrap_or_else(Utc::now),
    })
}
