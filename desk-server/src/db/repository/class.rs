//! Class Repository
//!
//! Read-only scheduling reference for the staff screens.

use super::RepoResult;
use shared::models::{Class, RegistrationWithCustomer};
use sqlx::SqlitePool;

/// Upcoming active classes, soonest first.
pub async fn find_upcoming(pool: &SqlitePool, now: i64) -> RepoResult<Vec<Class>> {
    let rows = sqlx::query_as::<_, Class>(
        "SELECT id, name, description, instructor_name, start_time, end_time, capacity, price_cents, is_active FROM class WHERE is_active = 1 AND start_time >= ? ORDER BY start_time LIMIT 20",
    )
    .bind(now)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn exists(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM class WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

pub async fn registrations(
    pool: &SqlitePool,
    class_id: i64,
) -> RepoResult<Vec<RegistrationWithCustomer>> {
    let rows = sqlx::query_as::<_, RegistrationWithCustomer>(
        "SELECT r.id, r.status, r.registered_at, c.first_name, c.last_name, c.email FROM class_registration r JOIN customer c ON r.customer_id = c.id WHERE r.class_id = ? AND r.status != 'cancelled' ORDER BY r.registered_at",
    )
    .bind(class_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
