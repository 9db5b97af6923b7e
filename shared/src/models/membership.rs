//! Membership Model

use serde::{Deserialize, Serialize};

/// Membership lifecycle status
///
/// At most one row with status `active` may exist per customer at any time
/// (constraint-backed in the schema). There is no reactivation path:
/// cancelling and re-adding creates a new row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    Active,
    Cancelled,
    PastDue,
    Trialing,
}

impl MembershipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
            Self::PastDue => "past_due",
            Self::Trialing => "trialing",
        }
    }
}

/// Membership plan reference data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MembershipPlan {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub billing_interval: String,
    pub is_active: bool,
}

/// Membership row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Membership {
    pub id: i64,
    pub customer_id: i64,
    pub plan_id: i64,
    pub status: MembershipStatus,
    pub started_at: i64,
    pub ends_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Membership with its plan name (for the check-in and customer screens)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MembershipWithPlan {
    pub id: i64,
    pub customer_id: i64,
    pub plan_id: i64,
    pub plan_name: String,
    pub status: MembershipStatus,
    pub started_at: i64,
    pub ends_at: Option<i64>,
}

/// Create membership payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipCreate {
    pub customer_id: i64,
    pub plan_id: i64,
}
