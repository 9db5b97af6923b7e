//! Visit Model

use serde::{Deserialize, Serialize};

/// How a customer was admitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum VisitType {
    Member,
    DayPass,
    PunchCard,
    Guest,
    Event,
}

impl VisitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::DayPass => "day_pass",
            Self::PunchCard => "punch_card",
            Self::Guest => "guest",
            Self::Event => "event",
        }
    }
}

/// Visit row — append-only, created exactly once per admitted check-in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Visit {
    pub id: i64,
    pub customer_id: i64,
    pub visit_type: VisitType,
    pub membership_id: Option<i64>,
    pub check_in_at: i64,
    pub check_out_at: Option<i64>,
}
