//! Sale Repository
//!
//! The header and its line items commit in one transaction: either the
//! full sale lands or nothing does. Readers never observe a header with
//! zero items.

use super::{RepoError, RepoResult};
use shared::models::{Sale, SaleItemInput};
use sqlx::SqlitePool;

pub async fn create_with_items(
    pool: &SqlitePool,
    customer_id: Option<i64>,
    items: &[SaleItemInput],
    total_cents: i64,
    tax_cents: i64,
    payment_method: &str,
) -> RepoResult<Sale> {
    if items.is_empty() {
        return Err(RepoError::Validation("sale must have at least one item".into()));
    }

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO sale (id, customer_id, total_cents, tax_cents, payment_method, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, 'completed', ?6)",
    )
    .bind(id)
    .bind(customer_id)
    .bind(total_cents)
    .bind(tax_cents)
    .bind(payment_method)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for item in items {
        let item_id = shared::util::snowflake_id();
        sqlx::query(
            "INSERT INTO sale_item (id, sale_id, product_id, product_name, quantity, unit_price_cents, total_cents) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(item_id)
        .bind(id)
        .bind(item.product_id)
        .bind(&item.product_name)
        .bind(item.quantity)
        .bind(item.unit_price_cents)
        .bind(item.total_cents)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(Sale {
        id,
        customer_id,
        total_cents,
        tax_cents,
        payment_method: payment_method.to_string(),
        status: "completed".to_string(),
        created_at: now,
    })
}
