//! Domain module — front-desk decision logic
//!
//! - [`identity`] — waiver-time customer resolution
//! - [`gate`] — check-in admission decision

pub mod gate;
pub mod identity;

pub use gate::{GateDecision, evaluate};
pub use identity::resolve_customer;
