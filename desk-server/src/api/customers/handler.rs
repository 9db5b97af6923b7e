//! Customer API Handlers
//!
//! Everything here is an advisory read for the staff screens. Lookups
//! degrade soft: a storage error answers as "not found" or an empty list
//! rather than blocking the desk.

use axum::extract::{Path, Query, State};

use crate::core::ServerState;
use crate::db::repository::{customer, membership, visit, waiver};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{Customer, CustomerSummary, MembershipWithPlan, Visit, WaiverSummary};

const VISIT_HISTORY_LIMIT: i64 = 50;

#[derive(serde::Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// GET /api/customers?q=xxx - search the directory
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> ApiResponse<Vec<CustomerSummary>> {
    let q = query.q.unwrap_or_default();
    if q.trim().is_empty() {
        return ApiResponse::success(Vec::new());
    }
    let rows = customer::search(&state.pool, &q).await.unwrap_or_default();
    ApiResponse::success(rows)
}

/// GET /api/customers/{id} - customer detail
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Customer>> {
    let row = customer::find_by_id(&state.pool, id)
        .await
        .ok()
        .flatten()
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::CustomerNotFound, format!("Customer {id} not found"))
        })?;
    Ok(ApiResponse::success(row))
}

/// GET /api/customers/{id}/membership - active membership or null
pub async fn active_membership(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> ApiResponse<Option<MembershipWithPlan>> {
    let row = membership::find_active(&state.pool, id).await.ok().flatten();
    ApiResponse::success(row)
}

/// GET /api/customers/{id}/waiver - most recent waiver or null
pub async fn latest_waiver(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> ApiResponse<Option<WaiverSummary>> {
    let row = waiver::latest_for_customer(&state.pool, id).await.ok().flatten();
    ApiResponse::success(row)
}

/// GET /api/customers/{id}/visits - visit history, newest first
pub async fn visits(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> ApiResponse<Vec<Visit>> {
    let rows = visit::list_for_customer(&state.pool, id, VISIT_HISTORY_LIMIT)
        .await
        .unwrap_or_default();
    ApiResponse::success(rows)
}
