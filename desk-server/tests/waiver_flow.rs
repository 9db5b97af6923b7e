//! Integration tests for waiver signing and identity resolution.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, count_rows, get, post_json, seed_customer};
use serde_json::json;
use sqlx::SqlitePool;

fn adult_waiver(first: &str, last: &str, email: &str, phone: &str) -> serde_json::Value {
    json!({
        "first_name": first,
        "last_name": last,
        "email": email,
        "phone": phone,
        "waiver_type": "adult",
        "signature_data": "data:image/png;base64,abc",
        "agreed": true
    })
}

// ---------------------------------------------------------------------------
// Test: signing a waiver creates the customer and the waiver together
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn waiver_creates_customer_and_waiver(pool: SqlitePool) {
    let app = build_test_app(pool.clone());

    let response = post_json(
        app,
        "/api/waivers",
        adult_waiver("Jane", "Doe", "jane@x.com", "555-0101"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["code"], 0);
    assert!(body["data"]["customer_id"].is_i64());
    assert!(body["data"]["waiver_id"].is_i64());

    assert_eq!(count_rows(&pool, "customer").await, 1);
    assert_eq!(count_rows(&pool, "waiver").await, 1);
}

// ---------------------------------------------------------------------------
// Test: re-signing matches by email and refreshes contact fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn resigning_updates_contact_without_duplicate(pool: SqlitePool) {
    let app = build_test_app(pool.clone());

    let first = post_json(
        app.clone(),
        "/api/waivers",
        adult_waiver("Jane", "Doe", "jane@x.com", "555-0101"),
    )
    .await;
    let first_id = body_json(first).await["data"]["customer_id"].as_i64().unwrap();

    let second = post_json(
        app,
        "/api/waivers",
        adult_waiver("Jane", "Doe", "jane@x.com", "555-0202"),
    )
    .await;
    let second_id = body_json(second).await["data"]["customer_id"].as_i64().unwrap();

    assert_eq!(first_id, second_id);
    assert_eq!(count_rows(&pool, "customer").await, 1);
    assert_eq!(count_rows(&pool, "waiver").await, 2);

    let phone = sqlx::query_scalar::<_, String>("SELECT phone FROM customer WHERE id = ?")
        .bind(first_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(phone, "555-0202");
}

// ---------------------------------------------------------------------------
// Test: contact refresh is a full overwrite, not a merge
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn resigning_without_phone_clears_stored_phone(pool: SqlitePool) {
    let app = build_test_app(pool.clone());

    let first = post_json(
        app.clone(),
        "/api/waivers",
        adult_waiver("Jane", "Doe", "jane@x.com", "555-0101"),
    )
    .await;
    let customer_id = body_json(first).await["data"]["customer_id"].as_i64().unwrap();

    // Second signing omits the phone entirely
    let second = post_json(
        app,
        "/api/waivers",
        json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane@x.com",
            "waiver_type": "adult",
            "signature_data": "data:image/png;base64,abc",
            "agreed": true
        }),
    )
    .await;
    assert_eq!(
        body_json(second).await["data"]["customer_id"].as_i64().unwrap(),
        customer_id
    );

    let phone =
        sqlx::query_scalar::<_, Option<String>>("SELECT phone FROM customer WHERE id = ?")
            .bind(customer_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(phone, None);
}

// ---------------------------------------------------------------------------
// Test: email match wins even when the name differs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn email_match_beats_name_mismatch_for_adults(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let existing = seed_customer(&pool, "Janet", "Doe", Some("jane@x.com")).await;

    let response = post_json(
        app,
        "/api/waivers",
        adult_waiver("Jane", "Doe", "jane@x.com", "555-0101"),
    )
    .await;
    let matched = body_json(response).await["data"]["customer_id"].as_i64().unwrap();

    assert_eq!(matched, existing);
    assert_eq!(count_rows(&pool, "customer").await, 1);
}

// ---------------------------------------------------------------------------
// Test: minors never match by email, only by name
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn minor_ignores_guardian_email_match(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    // Sibling already on file under the shared guardian email
    let sibling = seed_customer(&pool, "Alex", "Smith", Some("guardian@x.com")).await;

    let response = post_json(
        app,
        "/api/waivers",
        json!({
            "first_name": "Bailey",
            "last_name": "Smith",
            "email": "guardian@x.com",
            "waiver_type": "minor",
            "guardian_name": "Pat Smith",
            "signature_data": "data:image/png;base64,abc",
            "agreed": true
        }),
    )
    .await;
    let created = body_json(response).await["data"]["customer_id"].as_i64().unwrap();

    assert_ne!(created, sibling);
    assert_eq!(count_rows(&pool, "customer").await, 2);
}

// ---------------------------------------------------------------------------
// Test: missing signature or agreement rejects before any write
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn missing_signature_writes_nothing(pool: SqlitePool) {
    let app = build_test_app(pool.clone());

    let response = post_json(
        app,
        "/api/waivers",
        json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "agreed": true
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(count_rows(&pool, "customer").await, 0);
    assert_eq!(count_rows(&pool, "waiver").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn missing_agreement_writes_nothing(pool: SqlitePool) {
    let app = build_test_app(pool.clone());

    let response = post_json(
        app,
        "/api/waivers",
        json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "signature_data": "data:image/png;base64,abc",
            "agreed": false
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(count_rows(&pool, "customer").await, 0);
    assert_eq!(count_rows(&pool, "waiver").await, 0);
}

// ---------------------------------------------------------------------------
// Test: waiver listing and detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn waiver_list_and_detail(pool: SqlitePool) {
    let app = build_test_app(pool.clone());

    let signed = post_json(
        app.clone(),
        "/api/waivers",
        adult_waiver("Jane", "Doe", "jane@x.com", "555-0101"),
    )
    .await;
    let waiver_id = body_json(signed).await["data"]["waiver_id"].as_i64().unwrap();

    let list = body_json(get(app.clone(), "/api/waivers?q=Jane").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
    assert_eq!(list["data"][0]["first_name"], "Jane");

    let detail =
        body_json(get(app.clone(), &format!("/api/waivers/{waiver_id}")).await).await;
    assert_eq!(detail["data"]["signature_data"], "data:image/png;base64,abc");
    assert_eq!(detail["data"]["waiver_version"], "1.0");

    let missing = get(app, "/api/waivers/999999").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
