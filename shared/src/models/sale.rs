//! Sale Model

use serde::{Deserialize, Serialize};

/// Sale header. Every sale has at least one line item; the two are written
/// in one storage transaction so a zero-item sale is never observable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: i64,
    pub customer_id: Option<i64>,
    pub total_cents: i64,
    pub tax_cents: i64,
    pub payment_method: String,
    pub status: String,
    pub created_at: i64,
}

/// Compact sale row for the daily report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SaleSummary {
    pub id: i64,
    pub total_cents: i64,
    pub created_at: i64,
}

/// Line item as submitted at checkout. Line totals are supplied by the
/// caller, not recomputed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleItemInput {
    pub product_id: Option<i64>,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub total_cents: i64,
}

/// Record-sale payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub items: Vec<SaleItemInput>,
    pub total_cents: Option<i64>,
    pub tax_cents: Option<i64>,
    pub payment_method: Option<String>,
}
