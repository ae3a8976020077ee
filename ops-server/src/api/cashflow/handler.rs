//! Cash Flow API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{CashFlowEntry, CashFlowEntryCreate};
use crate::db::repository::{CashFlowRepository, CashFlowSummary};
use crate::utils::{ApiResponse, AppResult, time};

/// Date range query, inclusive on both ends, store-local days
///
/// Both bounds default to today, so a bare `GET /api/cashflow` returns
/// the current day's ledger.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    #[serde(default, rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, rename = "endDate")]
    pub end_date: Option<String>,
}

/// Ledger slice with running totals
#[derive(Debug, Serialize)]
pub struct CashFlowResponse {
    pub entries: Vec<CashFlowEntry>,
    pub summary: CashFlowSummary,
}

/// List ledger entries in a date range
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<ApiResponse<CashFlowResponse>>> {
    let tz = state.config.tz();
    let today = time::today(tz).to_string();
    let start = query.start_date.unwrap_or_else(|| today.clone());
    let end = query.end_date.unwrap_or(today);
    let (start_ms, end_ms) = time::range_millis(&start, &end, tz)?;

    let repo = CashFlowRepository::new(state.db.clone());
    let entries = repo.find_range(start_ms, end_ms).await?;
    let summary = CashFlowSummary::from_entries(&entries);

    Ok(Json(ApiResponse::success(CashFlowResponse {
        entries,
        summary,
    })))
}

/// Append a manual ledger entry
///
/// The entry lands at the start of its transaction day so range queries
/// bucket it predictably regardless of when staff typed it in.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CashFlowEntryCreate>,
) -> AppResult<Json<ApiResponse<CashFlowEntry>>> {
    let tz = state.config.tz();
    let day = match payload.date.as_deref() {
        Some(raw) => time::parse_date(raw)?,
        None => time::today(tz),
    };

    let entry = CashFlowEntry {
        id: None,
        description: payload.description,
        kind: payload.kind,
        amount: payload.amount,
        order_id: None,
        occurred_at: time::day_start_millis(day, tz),
        created_at: shared::util::now_millis(),
    };

    let repo = CashFlowRepository::new(state.db.clone());
    let created = repo.create(entry).await?;
    Ok(Json(ApiResponse::success(created)))
}
