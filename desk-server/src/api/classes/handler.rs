//! Class API Handlers

use axum::extract::{Path, State};

use crate::core::ServerState;
use crate::db::repository::class;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{Class, RegistrationWithCustomer};

/// GET /api/classes - upcoming active classes
pub async fn list(State(state): State<ServerState>) -> ApiResponse<Vec<Class>> {
    let now = shared::util::now_millis();
    let rows = class::find_upcoming(&state.pool, now).await.unwrap_or_default();
    ApiResponse::success(rows)
}

/// GET /api/classes/{id}/registrations - roster for one class
pub async fn registrations(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Vec<RegistrationWithCustomer>>> {
    if !class::exists(&state.pool, id).await.unwrap_or(false) {
        return Err(AppError::with_message(
            ErrorCode::ClassNotFound,
            format!("Class {id} not found"),
        ));
    }
    let rows = class::registrations(&state.pool, id).await.unwrap_or_default();
    Ok(ApiResponse::success(rows))
}
