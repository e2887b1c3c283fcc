//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /       -> list
/// GET    /{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list))
        .route("/{id}", get(category::get_by_id))
}
