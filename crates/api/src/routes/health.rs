use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health -- service and database health.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service and database health", body = HealthResponse))
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = recipe_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the database");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount health check routes (root level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
