//! Membership API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::{RepoError, customer, membership, plan};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{MembershipCreate, MembershipWithPlan};

/// POST /api/memberships - add a membership
///
/// The pre-check gives a friendly message for the common case; the
/// partial unique index is what actually decides a concurrent race, and
/// its violation maps to the same conflict.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MembershipCreate>,
) -> AppResult<ApiResponse<MembershipWithPlan>> {
    if customer::find_by_id(&state.pool, payload.customer_id)
        .await?
        .is_none()
    {
        return Err(AppError::with_message(
            ErrorCode::CustomerNotFound,
            format!("Customer {} not found", payload.customer_id),
        ));
    }
    if plan::find_by_id(&state.pool, payload.plan_id).await?.is_none() {
        return Err(AppError::with_message(
            ErrorCode::PlanNotFound,
            format!("Membership plan {} not found", payload.plan_id),
        ));
    }

    if membership::find_active(&state.pool, payload.customer_id)
        .await?
        .is_some()
    {
        return Err(already_active(payload.customer_id));
    }

    let created = membership::create_active(&state.pool, payload.customer_id, payload.plan_id)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => already_active(payload.customer_id),
            other => other.into(),
        })?;

    tracing::info!(
        membership_id = created.id,
        customer_id = created.customer_id,
        plan = %created.plan_name,
        "Membership added"
    );

    Ok(ApiResponse::success(created))
}

fn already_active(customer_id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::MembershipAlreadyActive,
        "Customer already has an active membership",
    )
    .with_detail("customer_id", customer_id.to_string())
}

/// DELETE /api/memberships/{id} - cancel a membership
///
/// Cancelling a missing or already-cancelled membership is a benign
/// no-op, not an error.
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    let cancelled = membership::cancel(&state.pool, id).await?;
    if cancelled {
        tracing::info!(membership_id = id, "Membership cancelled");
    }
    Ok(ApiResponse::ok())
}
