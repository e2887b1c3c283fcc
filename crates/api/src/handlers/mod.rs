//! Request handlers for recipes and categories.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers delegate to the corresponding repository in `recipe_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod category;
pub mod recipe;
