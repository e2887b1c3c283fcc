//! Handlers for the `/recipes` resource, including latest, by-category and
//! paginated text search.

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::Json;
use recipe_core::error::CoreError;
use recipe_core::recipe::{resolve_latest_count, RECIPE_ENTITY, SEARCH_PAGE_ENTITY};
use recipe_core::search::validate_search_page;
use recipe_core::types::DbId;
use recipe_db::models::recipe::{
    CreateRecipe, PagedRecipe, Recipe, SearchRecipesRequest, UpdateRecipe,
};
use recipe_db::repositories::RecipeRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::{CategoryFilterParams, LatestParams};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: RECIPE_ENTITY,
        id,
    })
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/recipes
#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    tag = "recipes",
    responses((status = 200, description = "Every recipe, in id order", body = [Recipe]))
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Recipe>>> {
    let recipes = RecipeRepo::list(&state.pool).await?;
    Ok(Json(recipes))
}

/// GET /api/v1/recipes/{id}
#[utoipa::path(
    get,
    path = "/api/v1/recipes/{id}",
    tag = "recipes",
    params(("id" = i64, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "The recipe", body = Recipe),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "No such recipe")
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Recipe>> {
    let recipe = RecipeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(recipe))
}

/// POST /api/v1/recipes
///
/// Responds 201 with the stored recipe and a `Location` header pointing at it.
#[utoipa::path(
    post,
    path = "/api/v1/recipes",
    tag = "recipes",
    request_body = CreateRecipe,
    responses(
        (status = 201, description = "Recipe stored", body = Recipe),
        (status = 400, description = "Malformed or invalid recipe")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRecipe>,
) -> AppResult<(StatusCode, HeaderMap, Json<Recipe>)> {
    input.validate()?;

    let recipe = RecipeRepo::create(&state.pool, &input).await?;
    tracing::info!(recipe_id = recipe.id, name = %recipe.name, "Recipe created");

    let mut headers = HeaderMap::new();
    let location = format!("/api/v1/recipes/{}", recipe.id);
    let location = HeaderValue::from_str(&location)
        .map_err(|e| AppError::InternalError(format!("Invalid Location header: {e}")))?;
    headers.insert(header::LOCATION, location);

    Ok((StatusCode::CREATED, headers, Json(recipe)))
}

/// PUT /api/v1/recipes/{id}
///
/// Full replacement. The body id must equal the path id.
#[utoipa::path(
    put,
    path = "/api/v1/recipes/{id}",
    tag = "recipes",
    params(("id" = i64, Path, description = "Recipe id")),
    request_body = UpdateRecipe,
    responses(
        (status = 204, description = "Recipe replaced"),
        (status = 400, description = "Id mismatch, malformed or invalid recipe"),
        (status = 404, description = "No such recipe"),
        (status = 500, description = "Recipe exists but the write did not apply")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateRecipe>,
) -> AppResult<StatusCode> {
    if input.id != id {
        return Err(AppError::BadRequest(format!(
            "Path id {id} does not match body id {}",
            input.id
        )));
    }
    input.validate()?;

    if RecipeRepo::update(&state.pool, id, &input).await?.is_some() {
        tracing::info!(recipe_id = id, "Recipe updated");
        return Ok(StatusCode::NO_CONTENT);
    }

    // No row was written: either it never existed or it vanished mid-write.
    if RecipeRepo::exists(&state.pool, id).await? {
        Err(AppError::Core(CoreError::ConcurrencyConflict {
            entity: RECIPE_ENTITY,
            id,
        }))
    } else {
        Err(not_found(id))
    }
}

/// DELETE /api/v1/recipes/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/recipes/{id}",
    tag = "recipes",
    params(("id" = i64, Path, description = "Recipe id")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "No such recipe")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = RecipeRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(recipe_id = id, "Recipe deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Derived reads
// ---------------------------------------------------------------------------

/// GET /api/v1/recipes/latest?count=N
#[utoipa::path(
    get,
    path = "/api/v1/recipes/latest",
    tag = "recipes",
    params(LatestParams),
    responses(
        (status = 200, description = "Newest recipes first", body = [Recipe]),
        (status = 400, description = "Count is not an integer")
    )
)]
pub async fn latest(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LatestParams>,
) -> AppResult<Json<Vec<Recipe>>> {
    let count = resolve_latest_count(params.count);
    let recipes = RecipeRepo::latest(&state.pool, count).await?;
    Ok(Json(recipes))
}

/// GET /api/v1/recipes/category?category=ID
#[utoipa::path(
    get,
    path = "/api/v1/recipes/category",
    tag = "recipes",
    params(CategoryFilterParams),
    responses(
        (status = 200, description = "Recipes in the category", body = [Recipe]),
        (status = 400, description = "Category missing or not an integer")
    )
)]
pub async fn list_by_category(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CategoryFilterParams>,
) -> AppResult<Json<Vec<Recipe>>> {
    let recipes = RecipeRepo::list_by_category(&state.pool, params.category).await?;
    Ok(Json(recipes))
}

/// POST /api/v1/recipes/search
///
/// Paging is checked before the store is consulted. An empty page is a 404.
#[utoipa::path(
    post,
    path = "/api/v1/recipes/search",
    tag = "recipes",
    request_body = SearchRecipesRequest,
    responses(
        (status = 200, description = "One page of matches, newest first", body = [PagedRecipe]),
        (status = 400, description = "Malformed request or invalid paging"),
        (status = 404, description = "The requested page is empty")
    )
)]
pub async fn search(
    State(state): State<AppState>,
    AppJson(params): AppJson<SearchRecipesRequest>,
) -> AppResult<Json<Vec<PagedRecipe>>> {
    validate_search_page(params.page_number, params.records_per_page)?;

    let page = RecipeRepo::search_by_text(&state.pool, &params).await?;
    if page.is_empty() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: SEARCH_PAGE_ENTITY,
            id: DbId::from(params.page_number),
        }));
    }
    Ok(Json(page))
}
