//! Waiver Repository

use super::RepoResult;
use shared::models::{WaiverDetail, WaiverListEntry, WaiverSummary, WaiverType};
use sqlx::{SqliteConnection, SqlitePool};

#[allow(clippy::too_many_arguments)]
pub async fn create(
    conn: &mut SqliteConnection,
    customer_id: i64,
    waiver_type: WaiverType,
    guardian_name: Option<&str>,
    guardian_signature: Option<&str>,
    signature_data: &str,
    waiver_version: &str,
    ip_address: Option<&str>,
) -> RepoResult<i64> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO waiver (id, customer_id, waiver_type, guardian_name, guardian_signature, signature_data, signed_at, waiver_version, ip_address) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )
    .bind(id)
    .bind(customer_id)
    .bind(waiver_type)
    .bind(guardian_name)
    .bind(guardian_signature)
    .bind(signature_data)
    .bind(now)
    .bind(waiver_version)
    .bind(ip_address)
    .execute(conn)
    .await?;
    Ok(id)
}

/// Most recently signed waiver for a customer. Any waiver on file counts
/// for admission, so only the newest row matters.
pub async fn latest_for_customer(
    pool: &SqlitePool,
    customer_id: i64,
) -> RepoResult<Option<WaiverSummary>> {
    let row = sqlx::query_as::<_, WaiverSummary>(
        "SELECT id, signed_at, waiver_type FROM waiver WHERE customer_id = ? ORDER BY signed_at DESC LIMIT 1",
    )
    .bind(customer_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn find_detail(pool: &SqlitePool, id: i64) -> RepoResult<Option<WaiverDetail>> {
    let row = sqlx::query_as::<_, WaiverDetail>(
        "SELECT w.id, w.customer_id, w.waiver_type, w.guardian_name, w.guardian_signature, w.signature_data, w.signed_at, w.waiver_version, w.ip_address, c.first_name, c.last_name, c.email, c.phone, c.date_of_birth FROM waiver w JOIN customer c ON w.customer_id = c.id WHERE w.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Recent waivers with the signer's name, newest first. Optional filter
/// over the signer's name or email.
pub async fn list(pool: &SqlitePool, query: Option<&str>) -> RepoResult<Vec<WaiverListEntry>> {
    const LIST_SELECT: &str = "SELECT w.id, w.customer_id, w.waiver_type, w.signed_at, c.first_name, c.last_name, c.email FROM waiver w JOIN customer c ON w.customer_id = c.id";
    let rows = match query {
        Some(q) if !q.trim().is_empty() => {
            let pattern = format!("%{}%", q.trim());
            let sql = format!(
                "{LIST_SELECT} WHERE c.first_name LIKE ?1 OR c.last_name LIKE ?1 OR c.email LIKE ?1 ORDER BY w.signed_at DESC LIMIT 100"
            );
            sqlx::query_as::<_, WaiverListEntry>(&sql)
                .bind(&pattern)
                .fetch_all(pool)
                .await?
        }
        _ => {
            let sql = format!("{LIST_SELECT} ORDER BY w.signed_at DESC LIMIT 100");
            sqlx::query_as::<_, WaiverListEntry>(&sql)
                .fetch_all(pool)
                .await?
        }
    };
    Ok(rows)
}
