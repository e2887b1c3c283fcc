//! Route definitions for the `/recipes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::recipe;
use crate::state::AppState;

/// Routes mounted at `/recipes`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// GET    /latest?count=N        -> latest
/// GET    /category?category=ID  -> list_by_category
/// POST   /search                -> search
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipe::list).post(recipe::create))
        .route("/latest", get(recipe::latest))
        .route("/category", get(recipe::list_by_category))
        .route("/search", post(recipe::search))
        .route(
            "/{id}",
            get(recipe::get_by_id)
                .put(recipe::update)
                .delete(recipe::delete),
        )
}
