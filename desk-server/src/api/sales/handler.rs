//! Sale API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::sale;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{Sale, SaleCreate};

const DEFAULT_PAYMENT_METHOD: &str = "card";

/// POST /api/sales - record a completed sale
///
/// Totals are trusted as submitted; the register computes them. The
/// header and every line item commit in one transaction.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SaleCreate>,
) -> AppResult<ApiResponse<Sale>> {
    if payload.items.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::SaleEmptyItems,
            "Sale must contain at least one item",
        ));
    }
    let total_cents = payload.total_cents.ok_or_else(|| {
        AppError::with_message(ErrorCode::SaleTotalRequired, "total_cents is required")
    })?;

    for item in &payload.items {
        validate_required_text(&item.product_name, "product_name", MAX_NAME_LEN)?;
        if item.quantity <= 0 {
            return Err(AppError::validation("quantity must be positive"));
        }
    }
    if let Some(method) = &payload.payment_method
        && method.len() > MAX_SHORT_TEXT_LEN
    {
        return Err(AppError::validation("payment_method is too long"));
    }

    let tax_cents = payload.tax_cents.unwrap_or(0);
    let payment_method = payload
        .payment_method
        .as_deref()
        .unwrap_or(DEFAULT_PAYMENT_METHOD);

    let recorded = sale::create_with_items(
        &state.pool,
        payload.customer_id,
        &payload.items,
        total_cents,
        tax_cents,
        payment_method,
    )
    .await?;

    tracing::info!(
        sale_id = recorded.id,
        total_cents = recorded.total_cents,
        items = payload.items.len(),
        "Sale recorded"
    );

    Ok(ApiResponse::success(recorded))
}
