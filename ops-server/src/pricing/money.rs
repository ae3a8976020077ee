//! Money conversion utilities using rust_decimal for precision
//!
//! All monetary calculations are done using `Decimal` internally, then
//! converted to `f64` for storage/serialization.

use rust_decimal::prelude::*;
use shared::{AppError, ErrorCode};

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub(crate) const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per item (R$1,000,000)
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per order line
const MAX_QUANTITY: u32 = 9999;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round to monetary precision (2 decimal places, half-up)
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{} must be a finite number, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Validate a monetary amount before it enters a calculation
pub fn validate_price(value: f64, field: &str) -> Result<(), AppError> {
    require_finite(value, field)?;
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    if value > MAX_PRICE {
        return Err(AppError::validation(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field, MAX_PRICE, value
        )));
    }
    Ok(())
}

/// Validate a line quantity (at least 1, bounded)
pub fn validate_quantity(quantity: u32) -> Result<(), AppError> {
    if quantity == 0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "quantity must be at least 1",
        ));
    }
    if quantity > MAX_QUANTITY {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!(
                "quantity exceeds maximum allowed ({}), got {}",
                MAX_QUANTITY, quantity
            ),
        ));
    }
    Ok(())
}
