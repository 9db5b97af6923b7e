//! Integration tests for the read-only reference and lookup endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json, seed_customer, seed_waiver};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Test: health endpoints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn health_endpoints(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = get(app.clone(), "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());

    let detailed = body_json(get(app, "/api/health/detailed").await).await;
    assert_eq!(detailed["status"], "healthy");
    assert_eq!(detailed["checks"]["database"]["status"], "ok");
}

// ---------------------------------------------------------------------------
// Test: seeded plans and products come back filtered and ordered
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn plans_ordered_by_price(pool: SqlitePool) {
    let app = build_test_app(pool);

    let body = body_json(get(app, "/api/plans").await).await;
    let plans = body["data"].as_array().unwrap();
    assert_eq!(plans.len(), 3);
    assert_eq!(plans[0]["name"], "Student Monthly");
    assert_eq!(plans[2]["name"], "Annual Unlimited");
}

#[sqlx::test(migrations = "./migrations")]
async fn products_filter_by_type(pool: SqlitePool) {
    let app = build_test_app(pool);

    let all = body_json(get(app.clone(), "/api/products").await).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 7);

    let rentals = body_json(get(app, "/api/products?product_type=rental").await).await;
    let rentals = rentals["data"].as_array().unwrap();
    assert_eq!(rentals.len(), 2);
    assert!(rentals.iter().all(|p| p["product_type"] == "rental"));
}

// ---------------------------------------------------------------------------
// Test: customer search rules
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn search_two_words_matches_first_and_last(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    seed_customer(&pool, "Jane", "Doe", Some("jane@x.com")).await;
    seed_customer(&pool, "Jane", "Smith", None).await;
    seed_customer(&pool, "John", "Doe", None).await;

    let body = body_json(get(app, "/api/customers?q=Jane%20Doe").await).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["first_name"], "Jane");
    assert_eq!(rows[0]["last_name"], "Doe");
}

#[sqlx::test(migrations = "./migrations")]
async fn search_three_words_treats_rest_as_last_name(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    seed_customer(&pool, "Mary", "Jane Watson", None).await;
    seed_customer(&pool, "Mary", "Jane", None).await;

    let body = body_json(get(app, "/api/customers?q=Mary%20Jane%20Watson").await).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["last_name"], "Jane Watson");
}

#[sqlx::test(migrations = "./migrations")]
async fn search_single_word_spans_fields(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    seed_customer(&pool, "Jane", "Doe", Some("jane@x.com")).await;
    seed_customer(&pool, "Alex", "Janeway", None).await;
    seed_customer(&pool, "Sam", "Smith", Some("sam@jane.org")).await;

    let body = body_json(get(app, "/api/customers?q=jane").await).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn search_empty_query_returns_empty(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    seed_customer(&pool, "Jane", "Doe", None).await;

    let body = body_json(get(app, "/api/customers?q=").await).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Test: customer detail and sub-resources
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn customer_detail_and_subresources(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let customer = seed_customer(&pool, "Jane", "Doe", Some("jane@x.com")).await;
    let waiver_id = seed_waiver(&pool, customer).await;

    let detail = body_json(get(app.clone(), &format!("/api/customers/{customer}")).await).await;
    assert_eq!(detail["data"]["email"], "jane@x.com");

    let missing = get(app.clone(), "/api/customers/999999").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    // No membership yet: explicit null, not an error
    let membership =
        body_json(get(app.clone(), &format!("/api/customers/{customer}/membership")).await).await;
    assert!(membership["data"].is_null());

    let waiver =
        body_json(get(app.clone(), &format!("/api/customers/{customer}/waiver")).await).await;
    assert_eq!(waiver["data"]["id"], waiver_id);

    post_json(
        app.clone(),
        "/api/checkins",
        json!({"customer_id": customer, "visit_type": "guest"}),
    )
    .await;
    let visits =
        body_json(get(app, &format!("/api/customers/{customer}/visits")).await).await;
    assert_eq!(visits["data"].as_array().unwrap().len(), 1);
    assert_eq!(visits["data"][0]["visit_type"], "guest");
}

// ---------------------------------------------------------------------------
// Test: class listing and roster
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn classes_and_registrations(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let customer = seed_customer(&pool, "Jane", "Doe", None).await;

    let now = shared::util::now_millis();
    let class_id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO class (id, name, start_time, end_time, capacity, price_cents) VALUES (?1, 'Intro to Climbing', ?2, ?3, 8, 4500)",
    )
    .bind(class_id)
    .bind(now + 86_400_000)
    .bind(now + 90_000_000)
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO class_registration (id, class_id, customer_id, status, registered_at) VALUES (?1, ?2, ?3, 'registered', ?4)",
    )
    .bind(shared::util::snowflake_id())
    .bind(class_id)
    .bind(customer)
    .bind(now)
    .execute(&pool)
    .await
    .unwrap();
    // Cancelled registrations stay off the roster
    sqlx::query(
        "INSERT INTO class_registration (id, class_id, customer_id, status, registered_at) VALUES (?1, ?2, ?3, 'cancelled', ?4)",
    )
    .bind(shared::util::snowflake_id())
    .bind(class_id)
    .bind(customer)
    .bind(now)
    .execute(&pool)
    .await
    .unwrap();

    let classes = body_json(get(app.clone(), "/api/classes").await).await;
    assert_eq!(classes["data"].as_array().unwrap().len(), 1);

    let roster =
        body_json(get(app.clone(), &format!("/api/classes/{class_id}/registrations")).await).await;
    let rows = roster["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["first_name"], "Jane");

    let missing = get(app, "/api/classes/999999/registrations").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
