//! Integration tests for the membership ledger.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, post_json, seed_customer};
use serde_json::json;
use sqlx::SqlitePool;

async fn active_count(pool: &SqlitePool, customer_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM membership WHERE customer_id = ? AND status = 'active'",
    )
    .bind(customer_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Test: add, conflict, cancel, re-add lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn add_membership_succeeds(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let customer = seed_customer(&pool, "Robin", "Crag", None).await;

    let response = post_json(
        app,
        "/api/memberships",
        json!({"customer_id": customer, "plan_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], "active");
    assert_eq!(body["data"]["customer_id"], customer);
    assert!(body["data"]["plan_name"].is_string());
    assert_eq!(active_count(&pool, customer).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn second_add_conflicts_while_active(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let customer = seed_customer(&pool, "Robin", "Crag", None).await;

    let first = post_json(
        app.clone(),
        "/api/memberships",
        json!({"customer_id": customer, "plan_id": 1}),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    // A different plan makes no difference; the customer already has one
    let second = post_json(
        app,
        "/api/memberships",
        json!({"customer_id": customer, "plan_id": 2}),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(active_count(&pool, customer).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn cancel_then_readd_creates_new_row(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let customer = seed_customer(&pool, "Robin", "Crag", None).await;

    let first = post_json(
        app.clone(),
        "/api/memberships",
        json!({"customer_id": customer, "plan_id": 1}),
    )
    .await;
    let first_id = body_json(first).await["data"]["id"].as_i64().unwrap();

    let cancelled = delete(app.clone(), &format!("/api/memberships/{first_id}")).await;
    assert_eq!(cancelled.status(), StatusCode::OK);
    assert_eq!(active_count(&pool, customer).await, 0);

    let second = post_json(
        app,
        "/api/memberships",
        json!({"customer_id": customer, "plan_id": 2}),
    )
    .await;
    assert_eq!(second.status(), StatusCode::OK);
    let second_id = body_json(second).await["data"]["id"].as_i64().unwrap();

    assert_ne!(first_id, second_id);
    assert_eq!(active_count(&pool, customer).await, 1);
}

// ---------------------------------------------------------------------------
// Test: cancelling a missing membership is a benign no-op
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn cancel_missing_membership_is_noop(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = delete(app, "/api/memberships/424242").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["code"], 0);
}

// ---------------------------------------------------------------------------
// Test: unknown customer or plan rejected before insert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn unknown_customer_or_plan_rejected(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let customer = seed_customer(&pool, "Robin", "Crag", None).await;

    let no_customer = post_json(
        app.clone(),
        "/api/memberships",
        json!({"customer_id": 999999, "plan_id": 1}),
    )
    .await;
    assert_eq!(no_customer.status(), StatusCode::NOT_FOUND);

    let no_plan = post_json(
        app,
        "/api/memberships",
        json!({"customer_id": customer, "plan_id": 999}),
    )
    .await;
    assert_eq!(no_plan.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: concurrent adds resolve to exactly one active membership
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn concurrent_adds_keep_single_active(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let customer = seed_customer(&pool, "Robin", "Crag", None).await;

    let body_a = json!({"customer_id": customer, "plan_id": 1});
    let body_b = json!({"customer_id": customer, "plan_id": 2});
    let (a, b) = tokio::join!(
        post_json(app.clone(), "/api/memberships", body_a),
        post_json(app, "/api/memberships", body_b),
    );

    let ok_count = [a.status(), b.status()]
        .iter()
        .filter(|s| **s == StatusCode::OK)
        .count();
    // The pre-check can race; the partial unique index cannot. Exactly one
    // add wins regardless of interleaving.
    assert_eq!(ok_count, 1);
    assert_eq!(active_count(&pool, customer).await, 1);
}
