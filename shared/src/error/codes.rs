//! Unified error codes for the front-desk platform
//!
//! This module defines all error codes used across desk-server and frontend.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Customer errors
//! - 2xxx: Waiver errors
//! - 3xxx: Membership errors
//! - 4xxx: Visit / check-in errors
//! - 5xxx: Sale errors
//! - 6xxx: Catalog errors (plans, products, classes)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 1001,

    // ==================== 2xxx: Waiver ====================
    /// Waiver not found
    WaiverNotFound = 2001,
    /// Signature is required to submit a waiver
    SignatureRequired = 2002,
    /// Waiver terms must be agreed to
    AgreementRequired = 2003,

    // ==================== 3xxx: Membership ====================
    /// Membership not found
    MembershipNotFound = 3001,
    /// Customer already has an active membership
    MembershipAlreadyActive = 3002,
    /// Membership plan not found
    PlanNotFound = 3003,

    // ==================== 4xxx: Visit ====================
    /// Visit not found
    VisitNotFound = 4001,
    /// Unknown visit type
    VisitTypeInvalid = 4002,

    // ==================== 5xxx: Sale ====================
    /// Sale not found
    SaleNotFound = 5001,
    /// Sale must contain at least one line item
    SaleEmptyItems = 5002,
    /// Sale total is required
    SaleTotalRequired = 5003,

    // ==================== 6xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Class not found
    ClassNotFound = 6101,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// System busy (IO error, retry later)
    SystemBusy = 9404,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Customer
            ErrorCode::CustomerNotFound => "Customer not found",

            // Waiver
            ErrorCode::WaiverNotFound => "Waiver not found",
            ErrorCode::SignatureRequired => "Signature is required",
            ErrorCode::AgreementRequired => "Waiver terms must be agreed to",

            // Membership
            ErrorCode::MembershipNotFound => "Membership not found",
            ErrorCode::MembershipAlreadyActive => "Customer already has an active membership",
            ErrorCode::PlanNotFound => "Membership plan not found",

            // Visit
            ErrorCode::VisitNotFound => "Visit not found",
            ErrorCode::VisitTypeInvalid => "Unknown visit type",

            // Sale
            ErrorCode::SaleNotFound => "Sale not found",
            ErrorCode::SaleEmptyItems => "Sale must contain at least one item",
            ErrorCode::SaleTotalRequired => "Sale total is required",

            // Catalog
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ClassNotFound => "Class not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::SystemBusy => "System busy, please retry later",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Customer
            1001 => Ok(ErrorCode::CustomerNotFound),

            // Waiver
            2001 => Ok(ErrorCode::WaiverNotFound),
            2002 => Ok(ErrorCode::SignatureRequired),
            2003 => Ok(ErrorCode::AgreementRequired),

            // Membership
            3001 => Ok(ErrorCode::MembershipNotFound),
            3002 => Ok(ErrorCode::MembershipAlreadyActive),
            3003 => Ok(ErrorCode::PlanNotFound),

            // Visit
            4001 => Ok(ErrorCode::VisitNotFound),
            4002 => Ok(ErrorCode::VisitTypeInvalid),

            // Sale
            5001 => Ok(ErrorCode::SaleNotFound),
            5002 => Ok(ErrorCode::SaleEmptyItems),
            5003 => Ok(ErrorCode::SaleTotalRequired),

            // Catalog
            6001 => Ok(ErrorCode::ProductNotFound),
            6101 => Ok(ErrorCode::ClassNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9404 => Ok(ErrorCode::SystemBusy),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.message())
    }
}
