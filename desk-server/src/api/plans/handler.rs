//! Membership Plan API Handlers

use axum::extract::State;

use crate::core::ServerState;
use crate::db::repository::plan;
use crate::utils::ApiResponse;
use shared::models::MembershipPlan;

/// GET /api/plans - active plans, cheapest first
pub async fn list(State(state): State<ServerState>) -> ApiResponse<Vec<MembershipPlan>> {
    let rows = plan::find_all_active(&state.pool).await.unwrap_or_default();
    ApiResponse::success(rows)
}
