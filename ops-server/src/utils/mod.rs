//! Utility Module
//!
//! - [`AppError`] / [`ApiResponse`] re-exported from `shared::error`
//! - logging setup and business-timezone date helpers

pub mod logger;
pub mod time;

pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
