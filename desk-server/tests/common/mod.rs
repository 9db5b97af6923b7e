//! Shared helpers for the integration tests.
//!
//! `build_test_app` mirrors the router construction in `Server::run` so
//! tests exercise the same middleware stack production uses, against a
//! hermetic per-test database provided by `#[sqlx::test]`.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header::CONTENT_TYPE};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use desk_server::core::{Config, ServerState};
use desk_server::services::http::build_router;

/// Build the full application router over the given pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let mut config = Config::with_overrides(":memory:", 0);
    config.timezone = chrono_tz::UTC;
    build_router(ServerState::with_pool(config, pool))
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert a customer row directly, returning its id.
pub async fn seed_customer(pool: &SqlitePool, first: &str, last: &str, email: Option<&str>) -> i64 {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO customer (id, first_name, last_name, email, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
    )
    .bind(id)
    .bind(first)
    .bind(last)
    .bind(email)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();
    id
}

/// Insert a waiver row directly for a customer.
pub async fn seed_waiver(pool: &SqlitePool, customer_id: i64) -> i64 {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO waiver (id, customer_id, waiver_type, signature_data, signed_at, waiver_version) VALUES (?1, ?2, 'adult', 'data:image/png;base64,sig', ?3, '1.0')",
    )
    .bind(id)
    .bind(customer_id)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();
    id
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar::<_, i64>(&sql)
        .fetch_one(pool)
        .await
        .unwrap()
}
