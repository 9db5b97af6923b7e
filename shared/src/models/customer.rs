//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer identity record
///
/// Created by the identity resolver at waiver-signing time, or directly by
/// staff. Never deleted. Near-duplicates can exist: uniqueness is not
/// enforced by a hard key, the resolver only minimizes duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Stored as `YYYY-MM-DD` text
    pub date_of_birth: Option<String>,
    pub key_tag_code: Option<String>,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Compact customer row for search results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CustomerSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub key_tag_code: Option<String>,
}
