//! Selectable sort orders over a book collection.
//!
//! [`sorted`] is a pure function: it clones the input slice, applies a stable
//! sort, and never touches the owning collection. Ties keep their input
//! order, so the displayed ordering is always a derivation, never state.

use std::fmt;
use std::str::FromStr;

use crate::book::Book;

/// The comparator selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    RatingDesc,
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    /// Every supported key, in presentation order.
    pub const ALL: [SortKey; 5] = [
        SortKey::RatingDesc,
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
    ];

    /// The kebab-case name used on the wire and the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::RatingDesc => "rating-desc",
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown sort key '{}' (expected one of: rating-desc, \
                     date-desc, date-asc, title-asc, title-desc)",
                    s
                )
            })
    }
}

/// Returns the records ordered by `key`. Stable: equal keys keep their
/// relative input order.
pub fn sorted(books: &[Book], key: SortKey) -> Vec<Book> {
    let mut out = books.to_vec();
    match key {
        SortKey::RatingDesc => out.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortKey::DateDesc => out.sort_by(|a, b| b.date_read.cmp(&a.date_read)),
        SortKey::DateAsc => out.sort_by(|a, b| a.date_read.cmp(&b.date_read)),
        SortKey::TitleAsc => out.sort_by(|a, b| title_key(&a.title).cmp(&title_key(&b.title))),
        SortKey::TitleDesc => out.sort_by(|a, b| title_key(&b.title).cmp(&title_key(&a.title))),
    }
    out
}

// Case-insensitive ordering key; `to_lowercase` handles the Unicode
// one-to-many mappings a plain byte comparison would get wrong.
fn title_key(title: &str) -> String {
    title.to_lowercase()
}
