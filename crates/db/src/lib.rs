//! Persistence layer for recipes and categories.
//!
//! Pool construction, health check and migrations live here; row models are
//! in [`models`] and queries in [`repositories`].

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to prove the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
