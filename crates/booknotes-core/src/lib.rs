//! Core domain model for the booknotes data layer.
//!
//! Everything in this crate is pure: the [`Book`] record and its validation
//! rules, identifier generation, cover-URL resolution, the sort engine, the
//! statistics calculator, and the portable import/export codec. Persistence
//! lives in `booknotes-storage`; presentation is the caller's concern.
//!
//! # Modules
//!
//! - [`book`]: the Book record, creation drafts, and update patches
//! - [`codec`]: versioned export document and lenient import filtering
//! - [`cover`]: ISBN-to-cover-URL resolution
//! - [`error`]: ValidationError and CodecError enums
//! - [`id`]: record identifier generation
//! - [`sort`]: selectable, stable sort orders over a collection
//! - [`stats`]: aggregate metrics over a collection

pub mod book;
pub mod codec;
pub mod cover;
pub mod error;
pub mod id;
pub mod sort;
pub mod stats;

// Re-export commonly used types
pub use book::{Book, BookDraft, BookPatch, RATING_MAX, RATING_MIN};
pub use codec::{export_document, parse_import, ImportOutcome, EXPORT_VERSION};
pub use cover::resolve_cover_url;
pub use error::{CodecError, ValidationError};
pub use id::generate_id;
pub use sort::{sorted, SortKey};
pub use stats::{library_stats, LibraryStats};
