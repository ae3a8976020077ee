//! Shared types for the Forno stack
//!
//! Common types used across the ops server and its clients: the unified
//! error system, the API response envelope, and the storefront cart
//! aggregation model.

pub mod cart;
pub mod error;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use cart::{Cart, CartExtra, CartItem, CartProduct};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
