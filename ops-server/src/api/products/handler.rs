//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::db::repository::ProductRepository;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// Query params for listing products
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// `available=true` returns the customer-facing menu only
    #[serde(default)]
    pub available: Option<bool>,
}

/// List products
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = match query.available {
        Some(true) => repo.find_available().await?,
        _ => repo.find_all().await?,
    };
    Ok(Json(ApiResponse::success(products)))
}

/// Get product by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(
            ErrorCode::ProductNotFound,
            format!("Product {} not found", id),
        )
    })?;
    Ok(Json(ApiResponse::success(product)))
}

/// Create a new product
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(payload).await?;
    Ok(Json(ApiResponse::success(product)))
}

/// Update a product
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo.update(&id, payload).await?;
    Ok(Json(ApiResponse::success(product)))
}

/// Delete a product
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let repo = ProductRepository::new(state.db.clone());
    let deleted = repo.delete(&id).await?;
    Ok(Json(ApiResponse::success(deleted)))
}
