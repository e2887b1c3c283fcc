//! Integration tests for the `search_recipes_by_text` routine.
//!
//! Covers keyword matching, category filtering, page arithmetic and the
//! routine's rejection of invalid paging.

use std::collections::HashSet;

use assert_matches::assert_matches;
use chrono::{Duration, TimeZone, Utc};
use recipe_core::types::DbId;
use recipe_db::models::recipe::{CreateRecipe, Recipe, SearchRecipesRequest};
use recipe_db::repositories::RecipeRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn request(
    search: Option<&str>,
    category_id: Option<DbId>,
    page_number: i32,
    records_per_page: i32,
) -> SearchRecipesRequest {
    SearchRecipesRequest {
        search_string: search.map(str::to_string),
        category_id,
        page_number,
        records_per_page,
    }
}

/// Seed a small cookbook with distinct add dates (one day apart).
async fn seed(pool: &PgPool) -> Vec<Recipe> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    let fixtures: [(&str, Option<DbId>, &str, &str); 7] = [
        ("Chewy Brown Sugar Cookies", Some(5), "soft cookies", "brown sugar\nbutter\nflour"),
        ("Classic Cheesecake", Some(5), "silky cheesecake", "cream cheese\nsugar\neggs"),
        ("Matcha Cookies", Some(5), "tea cookies", "matcha\nbutter\nwhite chocolate"),
        ("Cranberry Nut Bread", Some(1), "holiday loaf", "cranberries\nwalnuts\nflour"),
        ("Key Lime Pie", Some(5), "tangy pie", "limes\ncondensed milk"),
        ("Buttermilk Pancakes", Some(2), "fluffy stack", "buttermilk\nflour\neggs"),
        ("Mystery Stew", None, "100% unknown", "water\nstone"),
    ];

    let mut created = Vec::new();
    for (i, (name, category, description, ingredients)) in fixtures.into_iter().enumerate() {
        let input = CreateRecipe {
            category,
            name: name.to_string(),
            image: None,
            description: Some(description.to_string()),
            ingredients: Some(ingredients.to_string()),
            instructions: Some("Combine and bake.".to_string()),
            add_date: Some(base + Duration::days(i as i64)),
            change_date: None,
        };
        created.push(RecipeRepo::create(pool, &input).await.unwrap());
    }
    created
}

/// Pages needed for `match_count` rows at `per_page` rows each.
fn total_pages(match_count: i64, per_page: i32) -> i32 {
    let per_page = i64::from(per_page);
    ((match_count + per_page - 1) / per_page) as i32
}

/// Keywords as the routine splits them.
fn keywords(search: &str) -> Vec<&str> {
    search.split_whitespace().collect()
}

/// Rust-side statement of the matching rule, used as the test oracle.
fn matches(recipe: &Recipe, search: &str, category_id: Option<DbId>) -> bool {
    if category_id.is_some() && recipe.category != category_id {
        return false;
    }
    let haystack = [
        Some(recipe.name.as_str()),
        recipe.description.as_deref(),
        recipe.ingredients.as_deref(),
        recipe.instructions.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase();
    keywords(search)
        .iter()
        .all(|k| haystack.contains(&k.to_lowercase()))
}

async fn all_pages(pool: &PgPool, search: &str, category_id: Option<DbId>, per_page: i32) -> Vec<DbId> {
    let first = RecipeRepo::search_by_text(pool, &request(Some(search), category_id, 1, per_page))
        .await
        .unwrap();
    let pages = first.first().map_or(0, |r| r.total_pages);

    let mut ids: Vec<DbId> = first.iter().map(|r| r.recipe.id).collect();
    for page in 2..=pages {
        let rows = RecipeRepo::search_by_text(pool, &request(Some(search), category_id, page, per_page))
            .await
            .unwrap();
        assert!(!rows.is_empty(), "page {page} of {pages} should not be empty");
        ids.extend(rows.iter().map(|r| r.recipe.id));
    }
    ids
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_matches_keyword_case_insensitively(pool: PgPool) {
    seed(&pool).await;

    let rows = RecipeRepo::search_by_text(&pool, &request(Some("COOKIES"), None, 1, 10))
        .await
        .unwrap();
    let names: HashSet<&str> = rows.iter().map(|r| r.recipe.name.as_str()).collect();
    assert_eq!(
        names,
        HashSet::from(["Chewy Brown Sugar Cookies", "Matcha Cookies"])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_requires_every_keyword(pool: PgPool) {
    seed(&pool).await;

    let rows = RecipeRepo::search_by_text(&pool, &request(Some("butter matcha"), None, 1, 10))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].recipe.name, "Matcha Cookies");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_looks_inside_ingredients(pool: PgPool) {
    seed(&pool).await;

    let rows = RecipeRepo::search_by_text(&pool, &request(Some("walnuts"), None, 1, 10))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].recipe.name, "Cranberry Nut Bread");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_treats_like_wildcards_literally(pool: PgPool) {
    seed(&pool).await;

    let rows = RecipeRepo::search_by_text(&pool, &request(Some("100%"), None, 1, 10))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].recipe.name, "Mystery Stew");

    let rows = RecipeRepo::search_by_text(&pool, &request(Some("_"), None, 1, 10))
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_search_matches_everything(pool: PgPool) {
    let seeded = seed(&pool).await;

    for search in [None, Some(""), Some("   ")] {
        let rows = RecipeRepo::search_by_text(&pool, &request(search, None, 1, 100))
            .await
            .unwrap();
        assert_eq!(rows.len(), seeded.len());
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_filters_by_category(pool: PgPool) {
    seed(&pool).await;

    let rows = RecipeRepo::search_by_text(&pool, &request(Some("flour"), Some(5), 1, 10))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].recipe.name, "Chewy Brown Sugar Cookies");
    assert!(rows.iter().all(|r| r.recipe.category == Some(5)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_without_matches_is_empty(pool: PgPool) {
    seed(&pool).await;

    let rows = RecipeRepo::search_by_text(&pool, &request(Some("anchovy"), None, 1, 10))
        .await
        .unwrap();
    assert!(rows.is_empty());
}

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_every_row_carries_total_pages(pool: PgPool) {
    let seeded = seed(&pool).await;
    let expected: Vec<&Recipe> = seeded.iter().filter(|r| matches(r, "flour", None)).collect();
    assert_eq!(expected.len(), 3);

    let rows = RecipeRepo::search_by_text(&pool, &request(Some("flour"), None, 1, 2))
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    let pages = total_pages(expected.len() as i64, 2);
    assert_eq!(pages, 2);
    assert!(rows.iter().all(|r| r.total_pages == pages));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pages_are_ordered_newest_first(pool: PgPool) {
    seed(&pool).await;

    let rows = RecipeRepo::search_by_text(&pool, &request(None, None, 1, 100))
        .await
        .unwrap();
    for pair in rows.windows(2) {
        assert!(pair[0].recipe.add_date >= pair[1].recipe.add_date);
    }
    assert_eq!(rows[0].recipe.name, "Mystery Stew");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concatenated_pages_reconstruct_match_set(pool: PgPool) {
    let seeded = seed(&pool).await;

    for (search, category, per_page) in [("", None, 2), ("flour", None, 1), ("e", Some(5), 3), ("cookies", None, 5)] {
        let ids = all_pages(&pool, search, category, per_page).await;

        let unique: HashSet<DbId> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len(), "pages overlap for {search:?}");

        let expected: HashSet<DbId> = seeded
            .iter()
            .filter(|r| matches(r, search, category))
            .map(|r| r.id)
            .collect();
        assert_eq!(unique, expected, "match set differs for {search:?}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_past_the_end_is_empty(pool: PgPool) {
    seed(&pool).await;

    let first = RecipeRepo::search_by_text(&pool, &request(Some("cookies"), None, 1, 1))
        .await
        .unwrap();
    let pages = first[0].total_pages;

    let beyond = RecipeRepo::search_by_text(&pool, &request(Some("cookies"), None, pages + 1, 1))
        .await
        .unwrap();
    assert!(beyond.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_positive_page_size_is_rejected(pool: PgPool) {
    seed(&pool).await;

    for per_page in [0, -1] {
        let err = RecipeRepo::search_by_text(&pool, &request(Some("cookies"), None, 1, per_page))
            .await
            .unwrap_err();
        assert_matches!(
            &err,
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("22023")
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_zero_is_rejected(pool: PgPool) {
    let err = RecipeRepo::search_by_text(&pool, &request(None, None, 0, 10))
        .await
        .unwrap_err();
    assert_matches!(
        &err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("22023")
    );
}
