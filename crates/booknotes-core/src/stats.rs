//! Aggregate metrics derived from the current collection.

use serde::Serialize;

use crate::book::Book;

/// Derived statistics over a collection of books.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    pub count: usize,
    /// Mean rating rounded to one decimal place; 0.0 for an empty collection.
    pub average_rating: f64,
}

/// Computes [`LibraryStats`] for the given records.
pub fn library_stats(books: &[Book]) -> LibraryStats {
    let count = books.len();
    if count == 0 {
        return LibraryStats {
            count: 0,
            average_rating: 0.0,
        };
    }
    let sum: u32 = books.iter().map(|b| u32::from(b.rating)).sum();
    let mean = f64::from(sum) / count as f64;
    LibraryStats {
        count,
        average_rating: (mean * 10.0).round() / 10.0,
    }
}
