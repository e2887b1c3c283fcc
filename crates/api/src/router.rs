//! Shared application router builder.
//!
//! [`build_app_router`] is used by both the binary (`main.rs`) and the
//! integration tests (`tests/common/mod.rs`) so they run the same middleware
//! stack.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::openapi::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use crate::routes;
use crate::state::AppState;

/// How long browsers may cache a CORS preflight answer.
const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Build the full application [`Router`] with all middleware layers.
///
/// Routes: `/health` and the API docs at the root, everything else under
/// `/api/v1`. The middleware stack is applied bottom-up:
///
/// 1. CORS
/// 2. Set request ID on incoming requests
/// 3. Structured request/response tracing
/// 4. Propagate request ID to response
/// 5. Request timeout (408)
/// 6. Panic recovery (500)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");
    let docs = SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi());

    Router::new()
        .merge(routes::health::router())
        .merge(docs)
        .nest("/api/v1", routes::api_routes())
        // -- Middleware stack (applied bottom-up) --
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS policy for the browser front end.
///
/// Only the configured origins may call the API. They get the four verbs the
/// recipe routes use and may send a `content-type` header for JSON bodies.
/// Credentials are not allowed; the API has no cookies or auth headers.
///
/// # Panics
///
/// If a configured origin is not a valid header value. This happens once, at
/// startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(CORS_MAX_AGE)
}
