//! Repository for the `recipes` table and the recipe search routine.

use recipe_core::search::normalize_search_text;
use recipe_core::types::DbId;
use sqlx::PgPool;

use crate::models::recipe::{CreateRecipe, PagedRecipe, Recipe, SearchRecipesRequest, UpdateRecipe};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category, name, image, description, ingredients, instructions, \
                       add_date, change_date";

/// Provides CRUD, derived reads and search for recipes.
pub struct RecipeRepo;

impl RecipeRepo {
    /// Insert a new recipe, returning the created row.
    ///
    /// If `add_date` is `None` in the input, the insert time is used.
    pub async fn create(pool: &PgPool, input: &CreateRecipe) -> Result<Recipe, sqlx::Error> {
        let query = format!(
            "INSERT INTO recipes
                (category, name, image, description, ingredients, instructions, add_date, change_date)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(input.category)
            .bind(&input.name)
            .bind(&input.image)
            .bind(&input.description)
            .bind(&input.ingredients)
            .bind(&input.instructions)
            .bind(input.add_date)
            .bind(input.change_date)
            .fetch_one(pool)
            .await
    }

    /// Find a recipe by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = $1");
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a recipe with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM recipes WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all recipes in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes ORDER BY id");
        sqlx::query_as::<_, Recipe>(&query).fetch_all(pool).await
    }

    /// The `count` most recently added recipes, newest first.
    ///
    /// A non-positive `count` returns an empty list without querying.
    pub async fn latest(pool: &PgPool, count: i64) -> Result<Vec<Recipe>, sqlx::Error> {
        if count <= 0 {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM recipes ORDER BY add_date DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(count)
            .fetch_all(pool)
            .await
    }

    /// All recipes in the given category, in id order.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE category = $1 ORDER BY id");
        sqlx::query_as::<_, Recipe>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a recipe's fields.
    ///
    /// `add_date` keeps its stored value unless supplied; `change_date`
    /// defaults to the update time. Returns `None` if no row was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRecipe,
    ) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!(
            "UPDATE recipes SET
                category = $2,
                name = $3,
                image = $4,
                description = $5,
                ingredients = $6,
                instructions = $7,
                add_date = COALESCE($8, add_date),
                change_date = COALESCE($9, NOW())
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .bind(input.category)
            .bind(&input.name)
            .bind(&input.image)
            .bind(&input.description)
            .bind(&input.ingredients)
            .bind(&input.instructions)
            .bind(input.add_date)
            .bind(input.change_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a recipe by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Run the `search_recipes_by_text` routine for one page of results.
    ///
    /// A blank search string is sent as NULL (match everything). Invalid
    /// paging is rejected by the routine with SQLSTATE `22023`.
    pub async fn search_by_text(
        pool: &PgPool,
        params: &SearchRecipesRequest,
    ) -> Result<Vec<PagedRecipe>, sqlx::Error> {
        let search_text = normalize_search_text(params.search_string.as_deref());
        tracing::debug!(
            search_text = ?search_text,
            category_id = ?params.category_id,
            page_number = params.page_number,
            records_per_page = params.records_per_page,
            "Searching recipes",
        );
        sqlx::query_as::<_, PagedRecipe>(
            "SELECT id, category, name, image, description, ingredients, instructions, \
                    add_date, change_date, total_pages \
             FROM search_recipes_by_text($1, $2, $3, $4)",
        )
        .bind(search_text)
        .bind(params.category_id)
        .bind(params.page_number)
        .bind(params.records_per_page)
        .fetch_all(pool)
        .await
    }
}
