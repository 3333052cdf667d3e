//! Cover image URL resolution.
//!
//! A non-empty ISBN maps to the Open Library covers endpoint; anything else
//! gets a fixed placeholder image. Fetching the image (and falling back when
//! the provider has no cover) is a presentation concern.

/// Base URL of the Open Library cover image API.
pub const OPEN_LIBRARY_COVERS_API: &str = "https://covers.openlibrary.org/b/isbn/";

/// Placeholder shown for books without a usable ISBN.
pub const DEFAULT_COVER_URL: &str =
    "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80";

/// Derives a cover image URL from an ISBN.
pub fn resolve_cover_url(isbn: &str) -> String {
    let trimmed = isbn.trim();
    if trimmed.is_empty() {
        DEFAULT_COVER_URL.to_string()
    } else {
        format!("{}{}-M.jpg", OPEN_LIBRARY_COVERS_API, trimmed)
    }
}
