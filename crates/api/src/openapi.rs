//! OpenAPI document for the HTTP surface, served as JSON next to a Swagger UI.

use recipe_db::models::category::Category;
use recipe_db::models::recipe::{
    CreateRecipe, PagedRecipe, Recipe, SearchRecipesRequest, UpdateRecipe,
};
use utoipa::OpenApi;

use crate::handlers::{category, recipe};
use crate::routes::health;

/// Path of the generated document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Mount point of the interactive Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe API",
        description = "Recipes, categories and paginated recipe search."
    ),
    paths(
        recipe::list,
        recipe::create,
        recipe::get_by_id,
        recipe::update,
        recipe::delete,
        recipe::latest,
        recipe::list_by_category,
        recipe::search,
        category::list,
        category::get_by_id,
        health::health_check,
    ),
    components(schemas(
        Recipe,
        CreateRecipe,
        UpdateRecipe,
        PagedRecipe,
        SearchRecipesRequest,
        Category,
        health::HealthResponse,
    )),
    tags(
        (name = "recipes", description = "Recipe CRUD, derived reads and search"),
        (name = "categories", description = "Read-only recipe categories"),
        (name = "health", description = "Liveness and database reachability")
    )
)]
pub struct ApiDoc;
