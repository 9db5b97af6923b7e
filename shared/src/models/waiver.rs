//! Waiver Model

use serde::{Deserialize, Serialize};

/// Waiver type: who the liability release covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum WaiverType {
    Adult,
    Minor,
}

impl WaiverType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adult => "adult",
            Self::Minor => "minor",
        }
    }

    pub fn is_minor(&self) -> bool {
        matches!(self, Self::Minor)
    }
}

/// Signed liability record. Immutable once created; a customer may have many
/// waivers over time, only the most recent is authoritative for admission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Waiver {
    pub id: i64,
    pub customer_id: i64,
    pub waiver_type: WaiverType,
    pub guardian_name: Option<String>,
    pub guardian_signature: Option<String>,
    pub signature_data: String,
    pub signed_at: i64,
    pub waiver_version: String,
    pub ip_address: Option<String>,
}

/// Compact waiver row for the customer admission check
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WaiverSummary {
    pub id: i64,
    pub signed_at: i64,
    pub waiver_type: WaiverType,
}

/// Waiver list row with the signing customer's name attached
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WaiverListEntry {
    pub id: i64,
    pub customer_id: i64,
    pub waiver_type: WaiverType,
    pub signed_at: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

/// Full waiver detail including the signature payload and customer contact
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WaiverDetail {
    pub id: i64,
    pub customer_id: i64,
    pub waiver_type: WaiverType,
    pub guardian_name: Option<String>,
    pub guardian_signature: Option<String>,
    pub signature_data: String,
    pub signed_at: i64,
    pub waiver_version: String,
    pub ip_address: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
}

/// Waiver submission payload
///
/// `waiver_type` defaults to adult; `agreed` must be explicitly true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaiverSubmit {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    #[serde(default = "default_waiver_type")]
    pub waiver_type: WaiverType,
    pub guardian_name: Option<String>,
    pub guardian_signature: Option<String>,
    pub signature_data: Option<String>,
    #[serde(default)]
    pub agreed: bool,
}

fn default_waiver_type() -> WaiverType {
    WaiverType::Adult
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waiver_type_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&WaiverType::Adult).unwrap(), "\"adult\"");
        assert_eq!(serde_json::to_string(&WaiverType::Minor).unwrap(), "\"minor\"");
    }

    #[test]
    fn test_waiver_submit_defaults() {
        let submit: WaiverSubmit = serde_json::from_str(
            r#"{"first_name":"Jane","last_name":"Doe","signature_data":"data:image/png;base64,x"}"#,
        )
        .unwrap();
        assert_eq!(submit.waiver_type, WaiverType::Adult);
        assert!(!submit.agreed);
    }
}
