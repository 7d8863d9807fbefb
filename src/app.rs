use crate::api::{handlers::SharedUserService, handlers::api_routes, openapi::ApiDoc};
use crate::pages::page_routes;
use axum::{
    Json, Router,
    http::{StatusCode, header},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

/// Assembles pages, the user API and the HTTP middleware stack.
pub fn build_router(service: SharedUserService, request_timeout: Duration) -> Router {
    // CorsLayer answers every OPTIONS request itself, so it stays off
    // /api/users where OPTIONS must reach the 405 fallback.
    let docs_cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([http::Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }).layer(docs_cors),
        )
        .nest("/api", api_routes(service))
        .merge(page_routes())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
        .layer(TraceLayer::new_for_http())
}
