//! Product Repository

use super::RepoResult;
use shared::models::{Product, ProductType};
use sqlx::SqlitePool;

const PRODUCT_SELECT: &str =
    "SELECT id, name, product_type, price_cents, visits_included, is_active FROM product";

pub async fn find_all_active(
    pool: &SqlitePool,
    product_type: Option<ProductType>,
) -> RepoResult<Vec<Product>> {
    let rows = match product_type {
        Some(pt) => {
            let sql =
                format!("{PRODUCT_SELECT} WHERE is_active = 1 AND product_type = ? ORDER BY name");
            sqlx::query_as::<_, Product>(&sql)
                .bind(pt)
                .fetch_all(pool)
                .await?
        }
        None => {
            let sql = format!("{PRODUCT_SELECT} WHERE is_active = 1 ORDER BY name");
            sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await?
        }
    };
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let sql = format!("{PRODUCT_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Product>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}
