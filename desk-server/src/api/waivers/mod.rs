//! Waiver API module
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/waivers | POST | sign a waiver (resolves the customer) |
//! | /api/waivers | GET | recent waivers, optional ?q= filter |
//! | /api/waivers/{id} | GET | full waiver detail |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/waivers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::submit).get(handler::list))
        .route("/{id}", get(handler::get_by_id))
}
