//! Membership API module
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/memberships | POST | add a membership (Conflict if one is active) |
//! | /api/memberships/{id} | DELETE | cancel a membership (idempotent) |

mod handler;

use axum::{
    Router,
    routing::{delete, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/memberships", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{id}", delete(handler::cancel))
}
