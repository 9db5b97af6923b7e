//! Daily Report Repository
//!
//! All windows are half-open `[start, end)` in Unix millis; the caller
//! computes them in the business timezone.

use super::RepoResult;
use shared::models::{SaleSummary, VisitType};
use sqlx::SqlitePool;

/// Visit type of every check-in inside the window, for per-type counting.
pub async fn visit_types_in_window(
    pool: &SqlitePool,
    start: i64,
    end: i64,
) -> RepoResult<Vec<VisitType>> {
    let rows = sqlx::query_scalar::<_, VisitType>(
        "SELECT visit_type FROM visit WHERE check_in_at >= ? AND check_in_at < ?",
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Sum of completed sale totals inside the window.
pub async fn revenue_in_window(pool: &SqlitePool, start: i64, end: i64) -> RepoResult<i64> {
    let total = sqlx::query_scalar::<_, Option<i64>>(
        "SELECT SUM(total_cents) FROM sale WHERE status = 'completed' AND created_at >= ? AND created_at < ?",
    )
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;
    Ok(total.unwrap_or(0))
}

/// The most recent completed sales inside the window, newest first. The
/// report layer reverses these into chronological order.
pub async fn recent_sales_in_window(
    pool: &SqlitePool,
    start: i64,
    end: i64,
    limit: i64,
) -> RepoResult<Vec<SaleSummary>> {
    let rows = sqlx::query_as::<_, SaleSummary>(
        "SELECT id, total_cents, created_at FROM sale WHERE status = 'completed' AND created_at >= ? AND created_at < ? ORDER BY created_at DESC LIMIT ?",
    )
    .bind(start)
    .bind(end)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
