//! Recipe entity model, write DTOs, and the search result projection.

use recipe_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A row from the `recipes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[schema(value_type = i64)]
    pub id: DbId,
    #[schema(value_type = Option<i64>)]
    pub category: Option<DbId>,
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub add_date: Timestamp,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub change_date: Option<Timestamp>,
}

/// DTO for creating a recipe. The id is assigned by the database.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipe {
    #[schema(value_type = Option<i64>)]
    pub category: Option<DbId>,
    #[validate(
        length(min = 1, max = 200),
        custom(function = "not_blank")
    )]
    pub name: String,
    /// Free-form image reference: absolute URL or site-relative path.
    pub image: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    /// Defaults to the insert time if omitted.
    #[schema(value_type = Option<String>, format = DateTime)]
    pub add_date: Option<Timestamp>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub change_date: Option<Timestamp>,
}

/// DTO for replacing a recipe.
///
/// Every mutable field is overwritten, including with `None`. `id` must match
/// the id in the request path; a body without one deserializes to `0`, which
/// never matches.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipe {
    #[serde(default)]
    #[schema(value_type = i64)]
    pub id: DbId,
    #[schema(value_type = Option<i64>)]
    pub category: Option<DbId>,
    #[validate(
        length(min = 1, max = 200),
        custom(function = "not_blank")
    )]
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    /// Keeps the stored value if omitted.
    #[schema(value_type = Option<String>, format = DateTime)]
    pub add_date: Option<Timestamp>,
    /// Defaults to the update time if omitted.
    #[schema(value_type = Option<String>, format = DateTime)]
    pub change_date: Option<Timestamp>,
}

/// A row returned by the `search_recipes_by_text` routine.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedRecipe {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub recipe: Recipe,
    pub total_pages: i32,
}

/// Request body for `POST /recipes/search`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecipesRequest {
    pub search_string: Option<String>,
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<DbId>,
    pub page_number: i32,
    pub records_per_page: i32,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
