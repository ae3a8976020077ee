//! Order Pricing Module
//!
//! Computes line totals, order totals and coupon discounts for orders.
//! All arithmetic runs on `rust_decimal::Decimal`; `f64` only appears at
//! the serde/storage boundary.

mod calculator;
mod coupon;
mod money;

pub use calculator::*;
pub use coupon::*;
pub use money::*;
