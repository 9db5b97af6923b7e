//! Shared types for the front-desk platform
//!
//! Common types used by desk-server and its clients: data models,
//! the unified error system, and ID/time utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
