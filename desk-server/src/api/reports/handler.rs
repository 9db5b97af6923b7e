//! Report API Handlers

use axum::extract::{Query, State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::report;
use crate::utils::time::{day_end_millis, day_start_millis, parse_date, today_in_tz};
use crate::utils::{ApiResponse, AppResult};
use shared::models::{SaleSummary, VisitType};

const RECENT_SALES_LIMIT: i64 = 10;

/// Daily rollup for the staff dashboard
#[derive(Serialize)]
pub struct DailyReport {
    pub date: String,
    pub visits_count: i64,
    pub member_visits: i64,
    pub day_pass_visits: i64,
    pub revenue_cents: i64,
    /// The trailing 10 completed sales of the day, oldest first
    pub recent_sales: Vec<SaleSummary>,
}

#[derive(serde::Deserialize)]
pub struct DailyQuery {
    pub date: Option<String>,
}

/// GET /api/reports/daily?date=YYYY-MM-DD - visits and revenue rollup
///
/// The window is the calendar day in the business timezone, half-open.
/// Each half of the report degrades independently: a failed visits read
/// yields zero counts, a failed sales read yields zero revenue and an
/// empty sale list.
pub async fn daily(
    State(state): State<ServerState>,
    Query(query): Query<DailyQuery>,
) -> AppResult<ApiResponse<DailyReport>> {
    let tz = state.timezone();
    let date = match &query.date {
        Some(d) => parse_date(d)?,
        None => today_in_tz(tz),
    };
    let start = day_start_millis(date, tz);
    let end = day_end_millis(date, tz);

    let visit_types = report::visit_types_in_window(&state.pool, start, end)
        .await
        .unwrap_or_default();
    let visits_count = visit_types.len() as i64;
    let member_visits = visit_types
        .iter()
        .filter(|vt| **vt == VisitType::Member)
        .count() as i64;
    let day_pass_visits = visit_types
        .iter()
        .filter(|vt| matches!(vt, VisitType::DayPass | VisitType::PunchCard))
        .count() as i64;

    let revenue_cents = report::revenue_in_window(&state.pool, start, end)
        .await
        .unwrap_or(0);
    let mut recent_sales = report::recent_sales_in_window(&state.pool, start, end, RECENT_SALES_LIMIT)
        .await
        .unwrap_or_default();
    // Query returns newest first; the dashboard wants chronological order.
    recent_sales.reverse();

    Ok(ApiResponse::success(DailyReport {
        date: date.format("%Y-%m-%d").to_string(),
        visits_count,
        member_visits,
        day_pass_visits,
        revenue_cents,
        recent_sales,
    }))
}
