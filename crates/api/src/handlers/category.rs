//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::Json;
use recipe_core::error::CoreError;
use recipe_core::recipe::CATEGORY_ENTITY;
use recipe_core::types::DbId;
use recipe_db::models::category::Category;
use recipe_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::state::AppState;

/// GET /api/v1/categories
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "categories",
    responses((status = 200, description = "Every category", body = [Category]))
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/v1/categories/{id}
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category", body = Category),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "No such category")
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: CATEGORY_ENTITY,
            id,
        }))?;
    Ok(Json(category))
}
