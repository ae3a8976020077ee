//! Motoboy API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Motoboy, MotoboyCreate, MotoboyUpdate};
use crate::db::repository::MotoboyRepository;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// Query params for listing motoboys
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// `active=true` returns only couriers available for dispatch
    #[serde(default)]
    pub active: Option<bool>,
}

/// List couriers
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Motoboy>>>> {
    let repo = MotoboyRepository::new(state.db.clone());
    let motoboys = match query.active {
        Some(true) => repo.find_active().await?,
        _ => repo.find_all().await?,
    };
    Ok(Json(ApiResponse::success(motoboys)))
}

/// Get courier by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Motoboy>>> {
    let repo = MotoboyRepository::new(state.db.clone());
    let motoboy = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(
            ErrorCode::MotoboyNotFound,
            format!("Motoboy {} not found", id),
        )
    })?;
    Ok(Json(ApiResponse::success(motoboy)))
}

/// Register a courier
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MotoboyCreate>,
) -> AppResult<Json<ApiResponse<Motoboy>>> {
    let repo = MotoboyRepository::new(state.db.clone());
    let motoboy = repo.create(payload).await?;
    Ok(Json(ApiResponse::success(motoboy)))
}

/// Update a courier
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MotoboyUpdate>,
) -> AppResult<Json<ApiResponse<Motoboy>>> {
    let repo = MotoboyRepository::new(state.db.clone());
    let motoboy = repo.update(&id, payload).await?;
    Ok(Json(ApiResponse::success(motoboy)))
}

/// Remove a courier
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let repo = MotoboyRepository::new(state.db.clone());
    let deleted = repo.delete(&id).await?;
    Ok(Json(ApiResponse::success(deleted)))
}
