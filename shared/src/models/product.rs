//! Product Model

use serde::{Deserialize, Serialize};

/// Point-of-sale product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    DayPass,
    PunchCard,
    Retail,
    Rental,
    Class,
    Event,
}

/// Product reference data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub product_type: ProductType,
    pub price_cents: i64,
    /// Number of admissions a punch card grants
    pub visits_included: Option<i64>,
    pub is_active: bool,
}
