//! Delivery Fee API Module
//!
//! Routes:
//! - `GET    /api/delivery_fees`      - List covered neighborhoods
//! - `POST   /api/delivery_fees`      - Add a neighborhood
//! - `GET    /api/delivery_fees/{id}` - Get entry by id
//! - `PUT    /api/delivery_fees/{id}` - Update an entry
//! - `DELETE /api/delivery_fees/{id}` - Remove a neighborhood

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Delivery fee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/delivery_fees", routes())
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
