//! Query-string parameter types for recipe handlers.

use recipe_core::types::DbId;
use serde::Deserialize;
use utoipa::IntoParams;

/// `?count=` for the latest-recipes endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LatestParams {
    /// How many recipes to return (default 5; zero or less returns none).
    pub count: Option<i64>,
}

/// `?category=` for the recipes-by-category endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryFilterParams {
    /// Category id to filter on.
    #[param(value_type = i64)]
    pub category: DbId,
}
