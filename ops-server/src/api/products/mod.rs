//! Product API Module
//!
//! Routes:
//! - `GET    /api/products`      - List products (`?available=true` filters the menu)
//! - `POST   /api/products`      - Create a product
//! - `GET    /api/products/{id}` - Get product by id
//! - `PUT    /api/products/{id}` - Update a product
//! - `DELETE /api/products/{id}` - Delete a product

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Product router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", routes())
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
