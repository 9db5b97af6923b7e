//! Membership Plan Repository

use super::RepoResult;
use shared::models::MembershipPlan;
use sqlx::SqlitePool;

const PLAN_SELECT: &str =
    "SELECT id, name, description, price_cents, billing_interval, is_active FROM membership_plan";

pub async fn find_all_active(pool: &SqlitePool) -> RepoResult<Vec<MembershipPlan>> {
    let sql = format!("{PLAN_SELECT} WHERE is_active = 1 ORDER BY price_cents");
    let rows = sqlx::query_as::<_, MembershipPlan>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MembershipPlan>> {
    let sql = format!("{PLAN_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, MembershipPlan>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}
