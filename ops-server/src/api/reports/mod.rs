//! Reports API Module
//!
//! Routes:
//! - `GET /api/reports` - Revenue, order count and best sellers for a date range

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Reports router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reports", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::summary))
}
