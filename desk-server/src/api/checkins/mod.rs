//! Check-in API module
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/checkins | POST | admit or deny a walk-in |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/checkins", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::check_in))
}
