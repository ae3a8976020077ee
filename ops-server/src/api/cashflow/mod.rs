//! Cash Flow API Module
//!
//! Routes:
//! - `GET  /api/cashflow` - Ledger entries in a date range plus totals
//! - `POST /api/cashflow` - Append a manual entry (usually an expense)

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Cash flow router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cashflow", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::create).get(handler::list))
}
