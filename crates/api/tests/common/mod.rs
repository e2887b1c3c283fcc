#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use recipe_api::config::ServerConfig;
use recipe_api::router::build_app_router;
use recipe_api::state::AppState;

/// Origin allowed by [`test_config`].
pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Build a test `ServerConfig` with the local front-end origin and a
/// 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router over the given pool.
///
/// Goes through [`build_app_router`] so tests exercise the production
/// middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Send a raw body with a JSON content type (for malformed-payload tests).
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect the response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// POST a recipe and return its assigned id.
pub async fn create_recipe(pool: &PgPool, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/api/v1/recipes", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
