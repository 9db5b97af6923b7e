//! Product API Handlers

use axum::extract::{Query, State};

use crate::core::ServerState;
use crate::db::repository::product;
use crate::utils::ApiResponse;
use shared::models::{Product, ProductType};

#[derive(serde::Deserialize)]
pub struct ListQuery {
    pub product_type: Option<ProductType>,
}

/// GET /api/products?product_type=xxx - active products, by name
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> ApiResponse<Vec<Product>> {
    let rows = product::find_all_active(&state.pool, query.product_type)
        .await
        .unwrap_or_default();
    ApiResponse::success(rows)
}
