//! Order API Module
//!
//! | path | method | purpose |
//! |------|--------|---------|
//! | /api/orders | POST | checkout |
//! | /api/orders | GET | list, newest first |
//! | /api/orders/{id} | GET | fetch one |
//! | /api/orders/{id} | POST | lifecycle transition |
//! | /api/orders/{id}/finalize | GET | courier one-click finalization |
//! | /api/orders/{id}/pix | GET | PIX charge payload |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create).get(handler::list))
        .route("/{id}", get(handler::get_by_id).post(handler::update_status))
        .route("/{id}/finalize", get(handler::finalize))
        .route("/{id}/pix", get(handler::pix_charge))
}
