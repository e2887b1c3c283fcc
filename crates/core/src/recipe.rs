//! Recipe and category constants shared by the repository and API layers.

/// Entity label used in not-found errors and logs.
pub const RECIPE_ENTITY: &str = "Recipe";

/// Entity label used in not-found errors and logs.
pub const CATEGORY_ENTITY: &str = "Category";

/// Label for an empty search page; the "id" reported with it is the page
/// number.
pub const SEARCH_PAGE_ENTITY: &str = "Search results page";

/// Number of recipes returned by "latest" when the caller gives no count.
pub const DEFAULT_LATEST_COUNT: i64 = 5;

/// Resolve the requested "latest" count.
///
/// No upper bound is applied; a non-positive count is passed through and
/// yields an empty result downstream.
pub fn resolve_latest_count(count: Option<i64>) -> i64 {
    count.unwrap_or(DEFAULT_LATEST_COUNT)
}
