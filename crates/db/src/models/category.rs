//! Category entity model. Categories are read-only over the API.

use recipe_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[schema(value_type = i64)]
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}
