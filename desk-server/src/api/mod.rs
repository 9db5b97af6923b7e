//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`waivers`] - waiver signing and lookup
//! - [`customers`] - customer search and detail
//! - [`memberships`] - membership add/cancel
//! - [`checkins`] - admission gate
//! - [`sales`] - point-of-sale recording
//! - [`reports`] - daily rollup
//! - [`plans`] - membership plan reference data
//! - [`products`] - product reference data
//! - [`classes`] - class schedule reference data

pub mod health;

pub mod checkins;
pub mod classes;
pub mod customers;
pub mod memberships;
pub mod plans;
pub mod products;
pub mod reports;
pub mod sales;
pub mod waivers;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};
