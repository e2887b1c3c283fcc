pub mod category;
pub mod health;
pub mod recipe;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /recipes                      list, create
/// /recipes/{id}                 get, update, delete
/// /recipes/latest               newest recipes (?count=N)
/// /recipes/category             recipes in a category (?category=ID)
/// /recipes/search               paginated text search (POST)
///
/// /categories                   list
/// /categories/{id}              get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/recipes", recipe::router())
        .nest("/categories", category::router())
}
