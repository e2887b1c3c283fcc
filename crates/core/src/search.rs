//! Recipe text search: paging rules and input normalization.
//!
//! The matching itself runs inside the `search_recipes_by_text` stored
//! routine. This module holds the rules both sides agree on so the API can
//! reject bad paging before a round-trip.

use crate::error::CoreError;

/// First page number; pages are 1-based.
pub const FIRST_PAGE: i32 = 1;

/// Validate the paging half of a search request.
///
/// `page_number` must be >= [`FIRST_PAGE`] and `records_per_page` must be
/// positive. A page past the last one is valid and simply comes back empty.
pub fn validate_search_page(page_number: i32, records_per_page: i32) -> Result<(), CoreError> {
    if records_per_page <= 0 {
        return Err(CoreError::Validation(format!(
            "recordsPerPage must be > 0, got {records_per_page}"
        )));
    }
    if page_number < FIRST_PAGE {
        return Err(CoreError::Validation(format!(
            "pageNumber must be >= {FIRST_PAGE}, got {page_number}"
        )));
    }
    Ok(())
}

/// Trim the search string; blank input means "match everything" and maps to
/// `None`.
pub fn normalize_search_text(search: Option<&str>) -> Option<&str> {
    search.map(str::trim).filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
