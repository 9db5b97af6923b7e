//! Customer API module
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/customers?q= | GET | front-desk search box |
//! | /api/customers/{id} | GET | customer detail |
//! | /api/customers/{id}/membership | GET | active membership or null |
//! | /api/customers/{id}/waiver | GET | latest waiver or null |
//! | /api/customers/{id}/visits | GET | visit history, newest first |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/customers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::search))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/membership", get(handler::active_membership))
        .route("/{id}/waiver", get(handler::latest_waiver))
        .route("/{id}/visits", get(handler::visits))
}
