//! Coupon API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Coupon, CouponCreate, CouponUpdate};
use crate::db::repository::CouponRepository;
use crate::pricing::{CouponOutcome, normalize_code};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// List all coupons
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Coupon>>>> {
    let repo = CouponRepository::new(state.db.clone());
    let coupons = repo.find_all().await?;
    Ok(Json(ApiResponse::success(coupons)))
}

/// Get coupon by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Coupon>>> {
    let repo = CouponRepository::new(state.db.clone());
    let coupon = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::CouponNotFound, format!("Coupon {} not found", id))
    })?;
    Ok(Json(ApiResponse::success(coupon)))
}

/// Check a coupon code without placing an order
///
/// Returns the coupon when it exists and is active; otherwise the same
/// errors checkout would raise, so the storefront can surface them early.
pub async fn validate(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<ApiResponse<Coupon>>> {
    let normalized = normalize_code(&code);
    let repo = CouponRepository::new(state.db.clone());
    let found = repo.find_by_code(&normalized).await?;

    match CouponOutcome::classify(found) {
        CouponOutcome::Valid(coupon) => Ok(Json(ApiResponse::success(coupon))),
        CouponOutcome::Inactive(_) => Err(AppError::with_message(
            ErrorCode::CouponInactive,
            format!("Coupon {} is no longer active", normalized),
        )
        .with_detail("code", normalized)),
        CouponOutcome::NotFound => Err(AppError::with_message(
            ErrorCode::CouponNotFound,
            format!("Coupon {} not found", normalized),
        )
        .with_detail("code", normalized)),
    }
}

/// Create a new coupon
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CouponCreate>,
) -> AppResult<Json<ApiResponse<Coupon>>> {
    let repo = CouponRepository::new(state.db.clone());
    let coupon = repo.create(payload).await?;
    Ok(Json(ApiResponse::success(coupon)))
}

/// Update a coupon
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CouponUpdate>,
) -> AppResult<Json<ApiResponse<Coupon>>> {
    let repo = CouponRepository::new(state.db.clone());
    let coupon = repo.update(&id, payload).await?;
    Ok(Json(ApiResponse::success(coupon)))
}

/// Delete a coupon
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let repo = CouponRepository::new(state.db.clone());
    let deleted = repo.delete(&id).await?;
    Ok(Json(ApiResponse::success(deleted)))
}
