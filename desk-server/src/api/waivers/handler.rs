//! Waiver API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use http::HeaderMap;
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::waiver;
use crate::domain::resolve_customer;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_SIGNATURE_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{WaiverDetail, WaiverListEntry, WaiverSubmit};

const WAIVER_VERSION: &str = "1.0";

/// Result of a waiver submission
#[derive(Serialize)]
pub struct WaiverSigned {
    pub waiver_id: i64,
    pub customer_id: i64,
}

/// Best-effort client address for the audit trail
fn client_ip(headers: &HeaderMap) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string());
    forwarded.or_else(|| {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    })
}

fn validate_submit(payload: &WaiverSubmit) -> AppResult<()> {
    validate_required_text(&payload.first_name, "first_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.last_name, "last_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.guardian_name, "guardian_name", MAX_NAME_LEN)?;

    match payload.signature_data.as_deref() {
        Some(s) if !s.trim().is_empty() => {
            if s.len() > MAX_SIGNATURE_LEN {
                return Err(AppError::validation("signature_data is too long"));
            }
        }
        _ => {
            return Err(AppError::with_message(
                ErrorCode::SignatureRequired,
                "signature_data is required",
            ));
        }
    }

    if !payload.agreed {
        return Err(AppError::with_message(
            ErrorCode::AgreementRequired,
            "Waiver terms must be agreed to",
        ));
    }

    Ok(())
}

/// POST /api/waivers - resolve the customer and record the signed waiver
///
/// The customer resolution (lookup, contact refresh or create) and the
/// waiver insert commit in one transaction: a failure anywhere leaves no
/// partial customer or waiver row behind.
pub async fn submit(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(payload): Json<WaiverSubmit>,
) -> AppResult<ApiResponse<WaiverSigned>> {
    validate_submit(&payload)?;

    let signature = payload.signature_data.as_deref().unwrap_or_default();
    let ip = client_ip(&headers);

    let mut tx = state
        .pool
        .begin()
        .await
        .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

    let customer_id = resolve_customer(&mut *tx, &payload).await?;

    let waiver_id = waiver::create(
        &mut *tx,
        customer_id,
        payload.waiver_type,
        payload.guardian_name.as_deref(),
        payload.guardian_signature.as_deref(),
        signature,
        WAIVER_VERSION,
        ip.as_deref(),
    )
    .await?;

    tx.commit()
        .await
        .map_err(|e| AppError::database(format!("Failed to commit waiver: {e}")))?;

    tracing::info!(customer_id, waiver_id, "Waiver signed");

    Ok(ApiResponse::success(WaiverSigned {
        waiver_id,
        customer_id,
    }))
}

#[derive(serde::Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
}

/// GET /api/waivers?q= - recent waivers, soft-failing to empty
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> ApiResponse<Vec<WaiverListEntry>> {
    let rows = waiver::list(&state.pool, query.q.as_deref())
        .await
        .unwrap_or_default();
    ApiResponse::success(rows)
}

/// GET /api/waivers/{id} - full waiver detail
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<WaiverDetail>> {
    let detail = waiver::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::WaiverNotFound, format!("Waiver {id} not found")))?;
    Ok(ApiResponse::success(detail))
}
