//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Customer errors
/// - 2xxx: Waiver errors
/// - 3xxx: Membership errors
/// - 4xxx: Visit errors
/// - 5xxx: Sale errors
/// - 6xxx: Catalog errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Customer errors (1xxx)
    Customer,
    /// Waiver errors (2xxx)
    Waiver,
    /// Membership errors (3xxx)
    Membership,
    /// Visit errors (4xxx)
    Visit,
    /// Sale errors (5xxx)
    Sale,
    /// Catalog errors (6xxx)
    Catalog,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Customer,
            2000..3000 => Self::Waiver,
            3000..4000 => Self::Membership,
            4000..5000 => Self::Visit,
            5000..6000 => Self::Sale,
            6000..7000 => Self::Catalog,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Customer => "customer",
            Self::Waiver => "waiver",
            Self::Membership => "membership",
            Self::Visit => "visit",
            Self::Sale => "sale",
            Self::Catalog => "catalog",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
