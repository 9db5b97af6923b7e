//! Utility module — common helpers and types
//!
//! - [`AppError`] / [`ApiResponse`] — re-exported from `shared::error`
//! - [`logger`] — tracing setup
//! - [`time`] — business-timezone day windows
//! - [`validation`] — request field validation helpers

pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use result::AppResult;
pub use shared::error::{ApiResponse, AppError, ErrorCategory, ErrorCode};
