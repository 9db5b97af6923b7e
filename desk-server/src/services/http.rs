//! HTTP Service
//!
//! Router assembly and middleware. `build_app` registers every resource
//! router; `build_router` attaches state and the tower-http layers and is
//! what both the server and the integration tests serve requests against.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;

/// HTTP request logging middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::waivers::router())
        .merge(crate::api::customers::router())
        .merge(crate::api::memberships::router())
        .merge(crate::api::checkins::router())
        .merge(crate::api::sales::router())
        .merge(crate::api::reports::router())
        .merge(crate::api::plans::router())
        .merge(crate::api::products::router())
        .merge(crate::api::classes::router())
}

/// Build a fully configured application with middleware and state
pub fn build_router(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}
