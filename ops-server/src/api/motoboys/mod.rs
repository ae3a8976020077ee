//! Motoboy API Module
//!
//! Routes:
//! - `GET    /api/motoboys`      - List couriers (`?active=true` filters the roster)
//! - `POST   /api/motoboys`      - Register a courier
//! - `GET    /api/motoboys/{id}` - Get courier by id
//! - `PUT    /api/motoboys/{id}` - Update a courier
//! - `DELETE /api/motoboys/{id}` - Remove a courier

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Motoboy router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/motoboys", routes())
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
}
