//! Membership Repository
//!
//! The single-active-membership rule is enforced by the partial unique
//! index `idx_membership_one_active`; `create_active` surfaces a violation
//! as [`RepoError::Duplicate`] so two concurrent adds resolve to exactly
//! one active row.

use super::RepoResult;
use shared::models::{MembershipStatus, MembershipWithPlan};
use sqlx::SqlitePool;

const WITH_PLAN_SELECT: &str = "SELECT m.id, m.customer_id, m.plan_id, p.name as plan_name, m.status, m.started_at, m.ends_at FROM membership m JOIN membership_plan p ON m.plan_id = p.id";

pub async fn find_active(
    pool: &SqlitePool,
    customer_id: i64,
) -> RepoResult<Option<MembershipWithPlan>> {
    let sql = format!("{WITH_PLAN_SELECT} WHERE m.customer_id = ? AND m.status = 'active'");
    let row = sqlx::query_as::<_, MembershipWithPlan>(&sql)
        .bind(customer_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MembershipWithPlan>> {
    let sql = format!("{WITH_PLAN_SELECT} WHERE m.id = ?");
    let row = sqlx::query_as::<_, MembershipWithPlan>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create_active(
    pool: &SqlitePool,
    customer_id: i64,
    plan_id: i64,
) -> RepoResult<MembershipWithPlan> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO membership (id, customer_id, plan_id, status, started_at, created_at, updated_at) VALUES (?1, ?2, ?3, 'active', ?4, ?4, ?4)",
    )
    .bind(id)
    .bind(customer_id)
    .bind(plan_id)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| super::RepoError::Database("Failed to create membership".into()))
}

/// Transition a membership to cancelled. Returns false when the row does
/// not exist or is already in a non-active state (cancel is idempotent).
pub async fn cancel(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let result = sqlx::query(
        "UPDATE membership SET status = ?1, ends_at = ?2, updated_at = ?2 WHERE id = ?3 AND status = 'active'",
    )
    .bind(MembershipStatus::Cancelled)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
