//! Reports API Handlers

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::Order;
use crate::db::repository::OrderRepository;
use crate::utils::{ApiResponse, AppResult, time};

/// Best sellers shown per report
const TOP_ITEMS_LIMIT: usize = 10;

/// Date range query, inclusive on both ends, store-local days
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    #[serde(default, rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, rename = "endDate")]
    pub end_date: Option<String>,
}

/// One row of the best-sellers ranking
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TopItem {
    pub name: String,
    pub quantity: u64,
}

/// Sales report over finalized orders
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub revenue: f64,
    pub order_count: u64,
    pub top_items: Vec<TopItem>,
}

/// Sales summary for a date range
///
/// Only finalized orders count; orders still in flight never show up in
/// revenue or the ranking.
pub async fn summary(
    State(state): State<ServerState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<ApiResponse<ReportResponse>>> {
    let tz = state.config.tz();
    let today = time::today(tz).to_string();
    let start = query.start_date.unwrap_or_else(|| today.clone());
    let end = query.end_date.unwrap_or(today);
    let (start_ms, end_ms) = time::range_millis(&start, &end, tz)?;

    let repo = OrderRepository::new(state.db.clone());
    let stats = repo.finalized_stats(start_ms, end_ms).await?;
    let orders = repo.finalized_between(start_ms, end_ms).await?;

    Ok(Json(ApiResponse::success(ReportResponse {
        revenue: stats.revenue,
        order_count: stats.order_count,
        top_items: top_items(&orders, TOP_ITEMS_LIMIT),
    })))
}

/// Rank line items by units sold across orders
///
/// Ties break alphabetically so the ranking is stable between requests.
fn top_items(orders: &[Order], limit: usize) -> Vec<TopItem> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for order in orders {
        for item in &order.items {
            *counts.entry(item.name.as_str()).or_default() += u64::from(item.quantity);
        }
    }

    let mut ranking: Vec<TopItem> = counts
        .into_iter()
        .map(|(name, quantity)| TopItem {
            name: name.to_string(),
            quantity,
        })
        .collect();
    ranking.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.name.cmp(&b.name)));
    ranking.truncate(limit);
    ranking
}
