//! Delivery Fee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{DeliveryFee, DeliveryFeeCreate, DeliveryFeeUpdate};
use crate::db::repository::DeliveryFeeRepository;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// List all delivery fee entries
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<DeliveryFee>>>> {
    let repo = DeliveryFeeRepository::new(state.db.clone());
    let fees = repo.find_all().await?;
    Ok(Json(ApiResponse::success(fees)))
}

/// Get delivery fee entry by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<DeliveryFee>>> {
    let repo = DeliveryFeeRepository::new(state.db.clone());
    let fee = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(
            ErrorCode::DeliveryFeeNotFound,
            format!("Delivery fee {} not found", id),
        )
    })?;
    Ok(Json(ApiResponse::success(fee)))
}

/// Add a covered neighborhood
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DeliveryFeeCreate>,
) -> AppResult<Json<ApiResponse<DeliveryFee>>> {
    let repo = DeliveryFeeRepository::new(state.db.clone());
    let fee = repo.create(payload).await?;
    Ok(Json(ApiResponse::success(fee)))
}

/// Update a delivery fee entry
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DeliveryFeeUpdate>,
) -> AppResult<Json<ApiResponse<DeliveryFee>>> {
    let repo = DeliveryFeeRepository::new(state.db.clone());
    let fee = repo.update(&id, payload).await?;
    Ok(Json(ApiResponse::success(fee)))
}

/// Remove a neighborhood from the coverage map
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let repo = DeliveryFeeRepository::new(state.db.clone());
    let deleted = repo.delete(&id).await?;
    Ok(Json(ApiResponse::success(deleted)))
}
