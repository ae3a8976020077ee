//! HTTP API Module
//!
//! One submodule per resource, each exposing a `router()` that is
//! merged into the app in `services::http::build_app`.

pub mod cashflow;
pub mod coupons;
pub mod delivery_fees;
pub mod health;
pub mod motoboys;
pub mod orders;
pub mod products;
pub mod reports;
