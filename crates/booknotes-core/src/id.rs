//! Record identifier generation.
//!
//! Identifiers are UUID v4 strings: process-unique with overwhelming
//! likelihood, no counter to persist, no coordination required.

use uuid::Uuid;

/// Returns a fresh unique identifier for a book record.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
