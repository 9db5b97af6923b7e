//! Visit Repository

use super::RepoResult;
use shared::models::{Visit, VisitType};
use sqlx::SqlitePool;

const VISIT_SELECT: &str =
    "SELECT id, customer_id, visit_type, membership_id, check_in_at, check_out_at FROM visit";

pub async fn create(
    pool: &SqlitePool,
    customer_id: i64,
    visit_type: VisitType,
    membership_id: Option<i64>,
) -> RepoResult<Visit> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO visit (id, customer_id, visit_type, membership_id, check_in_at) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(id)
    .bind(customer_id)
    .bind(visit_type)
    .bind(membership_id)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(Visit {
        id,
        customer_id,
        visit_type,
        membership_id,
        check_in_at: now,
        check_out_at: None,
    })
}

/// A customer's visit history, newest first.
pub async fn list_for_customer(
    pool: &SqlitePool,
    customer_id: i64,
    limit: i64,
) -> RepoResult<Vec<Visit>> {
    let sql = format!("{VISIT_SELECT} WHERE customer_id = ? ORDER BY check_in_at DESC LIMIT ?");
    let rows = sqlx::query_as::<_, Visit>(&sql)
        .bind(customer_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}
