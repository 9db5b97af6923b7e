//! Class Model
//!
//! Scheduling reference data consumed read-only by the staff screens.
//! Capacity enforcement is out of scope for the consistency core.

use serde::{Deserialize, Serialize};

/// Scheduled class
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub instructor_name: Option<String>,
    pub start_time: i64,
    pub end_time: i64,
    pub capacity: i64,
    pub price_cents: i64,
    pub is_active: bool,
}

/// Registration with the registrant's name attached (roster view)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RegistrationWithCustomer {
    pub id: i64,
    pub status: String,
    pub registered_at: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}
