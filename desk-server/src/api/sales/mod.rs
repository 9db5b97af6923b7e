//! Sale API module
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/sales | POST | record a completed sale |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sales", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::create))
}
