//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderStatus, OrderStatusUpdate};
use crate::db::repository::OrderRepository;
use crate::orders::OrderService;
use crate::pix;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// Query params for listing orders
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

fn default_limit() -> i64 {
    50
}

/// PIX charge for an order
#[derive(Debug, Serialize)]
pub struct PixChargeResponse {
    /// Copia-e-cola payload
    pub payload: String,
    pub amount: f64,
}

/// Checkout: create an order with server-side pricing
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = OrderService::new(&state).create(payload).await?;
    Ok(Json(ApiResponse::success(order)))
}

/// List orders (paginated, optional status filter)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo
        .find_page(query.status, query.limit, query.offset)
        .await?;
    Ok(Json(ApiResponse::success(orders)))
}

/// Get order by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::OrderNotFound, format!("Order {} not found", id))
    })?;
    Ok(Json(ApiResponse::success(order)))
}

/// Apply a lifecycle transition
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = OrderService::new(&state).transition(&id, payload).await?;
    Ok(Json(ApiResponse::success(order)))
}

/// Courier one-click finalization, idempotent
pub async fn finalize(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = OrderService::new(&state).finalize(&id).await?;
    Ok(Json(ApiResponse::success(order)))
}

/// PIX payload for the order's amount due
pub async fn pix_charge(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<PixChargeResponse>>> {
    let key = state
        .config
        .pix_key
        .clone()
        .ok_or_else(|| AppError::config("PIX_KEY is not configured"))?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::OrderNotFound, format!("Order {} not found", id))
    })?;

    let txid = order
        .id
        .as_ref()
        .map(|record| record.key().to_string())
        .unwrap_or_default();
    let payload = pix::build_payload(
        &key,
        &state.config.store_name,
        &state.config.pix_merchant_city,
        order.final_price,
        &txid,
    );

    Ok(Json(ApiResponse::success(PixChargeResponse {
        payload,
        amount: order.final_price,
    })))
}
