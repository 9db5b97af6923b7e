//! Check-in API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::{membership, visit, waiver};
use crate::domain::{GateDecision, evaluate};
use crate::utils::{ApiResponse, AppResult};
use shared::models::VisitType;

#[derive(Deserialize)]
pub struct CheckInRequest {
    pub customer_id: i64,
    pub visit_type: VisitType,
}

/// Admission outcome. A denial is a business answer, not an error, so it
/// travels in a 200 payload with the reason for staff to read out.
#[derive(Serialize)]
pub struct CheckInResult {
    pub admitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_type: Option<VisitType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

/// POST /api/checkins - evaluate the gate and record the visit on admit
///
/// The waiver and membership reads are soft: if either lookup fails, the
/// customer is treated as having none, and the gate decides from that.
/// The visit insert on admit is a hard write.
pub async fn check_in(
    State(state): State<ServerState>,
    Json(payload): Json<CheckInRequest>,
) -> AppResult<ApiResponse<CheckInResult>> {
    let has_waiver = waiver::latest_for_customer(&state.pool, payload.customer_id)
        .await
        .ok()
        .flatten()
        .is_some();
    let active = membership::find_active(&state.pool, payload.customer_id)
        .await
        .ok()
        .flatten();

    match evaluate(payload.visit_type, has_waiver, active.as_ref()) {
        GateDecision::Admit {
            visit_type,
            membership_id,
        } => {
            let recorded =
                visit::create(&state.pool, payload.customer_id, visit_type, membership_id).await?;
            tracing::info!(
                customer_id = payload.customer_id,
                visit_id = recorded.id,
                visit_type = visit_type.as_str(),
                "Check-in admitted"
            );
            Ok(ApiResponse::success(CheckInResult {
                admitted: true,
                visit_id: Some(recorded.id),
                visit_type: Some(visit_type),
                reason: None,
            }))
        }
        GateDecision::Deny { reason } => {
            tracing::info!(
                customer_id = payload.customer_id,
                visit_type = payload.visit_type.as_str(),
                reason,
                "Check-in denied"
            );
            Ok(ApiResponse::success(CheckInResult {
                admitted: false,
                visit_id: None,
                visit_type: None,
                reason: Some(reason),
            }))
        }
    }
}
