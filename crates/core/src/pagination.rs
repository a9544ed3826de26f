//! Pagination rules for paged listings.
//!
//! The movie listing is paged with a fixed page size; callers supply a
//! 1-based page number and the repository layer turns it into a
//! LIMIT/OFFSET pair via these helpers.

/// Fixed page size for the movie listing.
pub const MOVIE_PAGE_SIZE: i64 = 5;

/// Clamp a user-provided 1-based page number to valid bounds.
///
/// Absent, zero, and negative values all resolve to the first page.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Row offset into the result set for a 1-based page number.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    (page.max(1) - 1) * page_size
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
