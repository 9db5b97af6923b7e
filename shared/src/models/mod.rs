//! Data models
//!
//! Shared between desk-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are snowflake-style `i64` (SQLite INTEGER PRIMARY KEY),
//! all timestamps are `i64` Unix millis.

pub mod class;
pub mod customer;
pub mod membership;
pub mod product;
pub mod sale;
pub mod visit;
pub mod waiver;

// Re-exports
pub use class::*;
pub use customer::*;
pub use membership::*;
pub use product::*;
pub use sale::*;
pub use visit::*;
pub use waiver::*;
