//! Core error types for booknotes-core.
//!
//! Uses `thiserror` for structured, matchable error variants. Validation
//! failures and codec failures are separate enums because they surface at
//! different entry points: validation guards `create`/`update`, the codec
//! guards import.

use thiserror::Error;

/// A record failed the validation rules for the validated entry points.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field was missing or empty after trimming.
    #[error("missing required field: '{field}'")]
    MissingField { field: &'static str },

    /// The rating fell outside the accepted 1..=5 range.
    #[error("rating out of range: {rating} (must be between 1 and 5)")]
    RatingOutOfRange { rating: u8 },
}

/// An import or export document could not be processed.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The document was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but has no `books` array at the top level.
    #[error("invalid data format: expected a 'books' array")]
    MissingBooks,

    /// Record-level filtering left nothing to import.
    #[error("no valid books found in the imported data")]
    EmptyImport,
}
