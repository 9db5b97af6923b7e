//! Customer Repository
//!
//! Identity matching is exact and case-sensitive: email first, then
//! (first_name, last_name). No fuzzy matching, ever.

use super::RepoResult;
use shared::models::{Customer, CustomerSummary};
use sqlx::{SqliteConnection, SqlitePool};

const CUSTOMER_SELECT: &str = "SELECT id, first_name, last_name, email, phone, date_of_birth, key_tag_code, notes, created_at, updated_at FROM customer";

const SUMMARY_SELECT: &str =
    "SELECT id, first_name, last_name, email, phone, key_tag_code FROM customer";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Customer>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Oldest customer with this exact email wins when duplicates exist.
pub async fn find_id_by_email(conn: &mut SqliteConnection, email: &str) -> RepoResult<Option<i64>> {
    let id = sqlx::query_scalar::<_, i64>(
        "SELECT id FROM customer WHERE email = ? ORDER BY created_at ASC LIMIT 1",
    )
    .bind(email)
    .fetch_optional(conn)
    .await?;
    Ok(id)
}

pub async fn find_id_by_name(
    conn: &mut SqliteConnection,
    first_name: &str,
    last_name: &str,
) -> RepoResult<Option<i64>> {
    let id = sqlx::query_scalar::<_, i64>(
        "SELECT id FROM customer WHERE first_name = ? AND last_name = ? ORDER BY created_at ASC LIMIT 1",
    )
    .bind(first_name)
    .bind(last_name)
    .fetch_optional(conn)
    .await?;
    Ok(id)
}

pub async fn create(
    conn: &mut SqliteConnection,
    first_name: &str,
    last_name: &str,
    email: Option<&str>,
    phone: Option<&str>,
    date_of_birth: Option<&str>,
) -> RepoResult<i64> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO customer (id, first_name, last_name, email, phone, date_of_birth, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
    )
    .bind(id)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(phone)
    .bind(date_of_birth)
    .bind(now)
    .execute(conn)
    .await?;
    Ok(id)
}

/// Last write wins: contact fields are replaced wholesale with the newly
/// supplied values. An omitted field clears the stored one; there is no
/// merging of old and new data.
pub async fn refresh_contact(
    conn: &mut SqliteConnection,
    id: i64,
    email: Option<&str>,
    phone: Option<&str>,
    date_of_birth: Option<&str>,
) -> RepoResult<()> {
    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE customer SET email = ?1, phone = ?2, date_of_birth = ?3, updated_at = ?4 WHERE id = ?5",
    )
    .bind(email)
    .bind(phone)
    .bind(date_of_birth)
    .bind(now)
    .bind(id)
    .execute(conn)
    .await?;
    Ok(())
}

/// Front-desk lookup box. Two or more words search first name AND the
/// rest as the last name; a single word searches across name, email and
/// key tag.
pub async fn search(pool: &SqlitePool, query: &str) -> RepoResult<Vec<CustomerSummary>> {
    let parts: Vec<&str> = query.split_whitespace().collect();
    let rows = if parts.len() >= 2 {
        let first = format!("%{}%", parts[0]);
        let last = format!("%{}%", parts[1..].join(" "));
        let sql = format!(
            "{SUMMARY_SELECT} WHERE first_name LIKE ?1 AND last_name LIKE ?2 ORDER BY first_name LIMIT 10"
        );
        sqlx::query_as::<_, CustomerSummary>(&sql)
            .bind(&first)
            .bind(&last)
            .fetch_all(pool)
            .await?
    } else {
        let pattern = format!("%{}%", query.trim());
        let sql = format!(
            "{SUMMARY_SELECT} WHERE first_name LIKE ?1 OR last_name LIKE ?1 OR email LIKE ?1 OR key_tag_code LIKE ?1 ORDER BY first_name LIMIT 10"
        );
        sqlx::query_as::<_, CustomerSummary>(&sql)
            .bind(&pattern)
            .fetch_all(pool)
            .await?
    };
    Ok(rows)
}
