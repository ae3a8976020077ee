//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Order errors
/// - 2xxx: Coupon errors
/// - 3xxx: Catalog errors
/// - 4xxx: Delivery errors
/// - 5xxx: Cash flow errors
/// - 6xxx: Notification errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Order errors (1xxx)
    Order,
    /// Coupon errors (2xxx)
    Coupon,
    /// Catalog errors (3xxx)
    Catalog,
    /// Delivery errors (4xxx)
    Delivery,
    /// Cash flow errors (5xxx)
    CashFlow,
    /// Notification errors (6xxx)
    Notification,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Order,
            2000..3000 => Self::Coupon,
            3000..4000 => Self::Catalog,
            4000..5000 => Self::Delivery,
            5000..6000 => Self::CashFlow,
            6000..7000 => Self::Notification,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Order => "order",
            Self::Coupon => "coupon",
            Self::Catalog => "catalog",
            Self::Delivery => "delivery",
            Self::CashFlow => "cash_flow",
            Self::Notification => "notification",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
