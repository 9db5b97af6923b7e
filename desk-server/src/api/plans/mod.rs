//! Membership plan API module
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/plans | GET | active membership plans |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/plans", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list))
}
