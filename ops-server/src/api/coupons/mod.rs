//! Coupon API Module
//!
//! Routes:
//! - `GET    /api/coupons`                 - List coupons
//! - `POST   /api/coupons`                 - Create a coupon
//! - `GET    /api/coupons/{id}`            - Get coupon by id
//! - `PUT    /api/coupons/{id}`            - Update a coupon
//! - `DELETE /api/coupons/{id}`            - Delete a coupon
//! - `GET    /api/coupons/validate/{code}` - Check a code before checkout

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Coupon router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/coupons", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create).get(handler::list))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/validate/{code}", get(handler::validate))
}
