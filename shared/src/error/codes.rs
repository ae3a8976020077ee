//! Unified error codes for the Forno stack
//!
//! This module defines all error codes used across the ops server and frontend.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Order errors
//! - 2xxx: Coupon errors
//! - 3xxx: Catalog errors
//! - 4xxx: Delivery errors
//! - 5xxx: Cash flow errors
//! - 6xxx: Notification errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Order ====================
    /// Order not found
    OrderNotFound = 1001,
    /// Order has no items
    OrderEmpty = 1002,
    /// Status transition is not allowed
    InvalidStatusTransition = 1003,
    /// Order has already been finalized
    OrderAlreadyFinalized = 1004,
    /// Dispatching a delivery requires a motoboy assignment
    MotoboyRequired = 1005,
    /// Status does not apply to this order type
    WrongOrderType = 1006,
    /// Unknown order status string
    InvalidOrderStatus = 1007,

    // ==================== 2xxx: Coupon ====================
    /// Coupon code not found
    CouponNotFound = 2001,
    /// Coupon exists but is deactivated
    CouponInactive = 2002,
    /// Coupon code already exists
    CouponCodeExists = 2003,

    // ==================== 3xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 3001,
    /// Product is flagged unavailable
    ProductUnavailable = 3002,
    /// Product name already exists
    ProductNameExists = 3003,
    /// Product has invalid price
    ProductInvalidPrice = 3004,

    // ==================== 4xxx: Delivery ====================
    /// Delivery fee not found
    DeliveryFeeNotFound = 4001,
    /// Neighborhood already has a delivery fee
    NeighborhoodExists = 4002,
    /// No delivery fee configured for the neighborhood
    NeighborhoodNotCovered = 4003,
    /// Motoboy not found
    MotoboyNotFound = 4101,

    // ==================== 5xxx: Cash flow ====================
    /// Cash flow entry not found
    CashFlowEntryNotFound = 5001,
    /// Order already has an income ledger entry
    DuplicateOrderEntry = 5002,
    /// Invalid date range
    InvalidDateRange = 5003,

    // ==================== 6xxx: Notification ====================
    /// Phone number has no usable digits
    InvalidPhoneNumber = 6001,
    /// Notification delivery failed
    NotificationFailed = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order has no items",
            ErrorCode::InvalidStatusTransition => "Status transition is not allowed",
            ErrorCode::OrderAlreadyFinalized => "Order has already been finalized",
            ErrorCode::MotoboyRequired => "A motoboy must be assigned before dispatch",
            ErrorCode::WrongOrderType => "Status does not apply to this order type",
            ErrorCode::InvalidOrderStatus => "Unknown order status",

            // Coupon
            ErrorCode::CouponNotFound => "Coupon not found",
            ErrorCode::CouponInactive => "Coupon is not active",
            ErrorCode::CouponCodeExists => "Coupon code already exists",

            // Catalog
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductUnavailable => "Product is not available",
            ErrorCode::ProductNameExists => "Product name already exists",
            ErrorCode::ProductInvalidPrice => "Product has invalid price",

            // Delivery
            ErrorCode::DeliveryFeeNotFound => "Delivery fee not found",
            ErrorCode::NeighborhoodExists => "Neighborhood already has a delivery fee",
            ErrorCode::NeighborhoodNotCovered => "No delivery fee configured for this neighborhood",
            ErrorCode::MotoboyNotFound => "Motoboy not found",

            // Cash flow
            ErrorCode::CashFlowEntryNotFound => "Cash flow entry not found",
            ErrorCode::DuplicateOrderEntry => "Order already has an income ledger entry",
            ErrorCode::InvalidDateRange => "Invalid date range",

            // Notification
            ErrorCode::InvalidPhoneNumber => "Phone number has no usable digits",
            ErrorCode::NotificationFailed => "Notification delivery failed",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Order
            1001 => Ok(ErrorCode::OrderNotFound),
            1002 => Ok(ErrorCode::OrderEmpty),
            1003 => Ok(ErrorCode::InvalidStatusTransition),
            1004 => Ok(ErrorCode::OrderAlreadyFinalized),
            1005 => Ok(ErrorCode::MotoboyRequired),
            1006 => Ok(ErrorCode::WrongOrderType),
            1007 => Ok(ErrorCode::InvalidOrderStatus),

            // Coupon
            2001 => Ok(ErrorCode::CouponNotFound),
            2002 => Ok(ErrorCode::CouponInactive),
            2003 => Ok(ErrorCode::CouponCodeExists),

            // Catalog
            3001 => Ok(ErrorCode::ProductNotFound),
            3002 => Ok(ErrorCode::ProductUnavailable),
            3003 => Ok(ErrorCode::ProductNameExists),
            3004 => Ok(ErrorCode::ProductInvalidPrice),

            // Delivery
            4001 => Ok(ErrorCode::DeliveryFeeNotFound),
            4002 => Ok(ErrorCode::NeighborhoodExists),
            4003 => Ok(ErrorCode::NeighborhoodNotCovered),
            4101 => Ok(ErrorCode::MotoboyNotFound),

            // Cash flow
            5001 => Ok(ErrorCode::CashFlowEntryNotFound),
            5002 => Ok(ErrorCode::DuplicateOrderEntry),
            5003 => Ok(ErrorCode::InvalidDateRange),

            // Notification
            6001 => Ok(ErrorCode::InvalidPhoneNumber),
            6002 => Ok(ErrorCode::NotificationFailed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::Unknown.code(), 1);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AlreadyExists.code(), 4);
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::InvalidFormat.code(), 6);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);

        // Order
        assert_eq!(ErrorCode::OrderNotFound.code(), 1001);
        assert_eq!(ErrorCode::OrderEmpty.code(), 1002);
        assert_eq!(ErrorCode::InvalidStatusTransition.code(), 1003);
        assert_eq!(ErrorCode::OrderAlreadyFinalized.code(), 1004);
        assert_eq!(ErrorCode::MotoboyRequired.code(), 1005);
        assert_eq!(ErrorCode::WrongOrderType.code(), 1006);
        assert_eq!(ErrorCode::InvalidOrderStatus.code(), 1007);

        // Coupon
        assert_eq!(ErrorCode::CouponNotFound.code(), 2001);
        assert_eq!(ErrorCode::CouponInactive.code(), 2002);
        assert_eq!(ErrorCode::CouponCodeExists.code(), 2003);

        // Catalog
        assert_eq!(ErrorCode::ProductNotFound.code(), 3001);
        assert_eq!(ErrorCode::ProductUnavailable.code(), 3002);
        assert_eq!(ErrorCode::ProductNameExists.code(), 3003);
        assert_eq!(ErrorCode::ProductInvalidPrice.code(), 3004);

        // Delivery
        assert_eq!(ErrorCode::DeliveryFeeNotFound.code(), 4001);
        assert_eq!(ErrorCode::NeighborhoodExists.code(), 4002);
        assert_eq!(ErrorCode::NeighborhoodNotCovered.code(), 4003);
        assert_eq!(ErrorCode::MotoboyNotFound.code(), 4101);

        // Cash flow
        assert_eq!(ErrorCode::CashFlowEntryNotFound.code(), 5001);
        assert_eq!(ErrorCode::DuplicateOrderEntry.code(), 5002);
        assert_eq!(ErrorCode::InvalidDateRange.code(), 5003);

        // Notification
        assert_eq!(ErrorCode::InvalidPhoneNumber.code(), 6001);
        assert_eq!(ErrorCode::NotificationFailed.code(), 6002);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
        assert_eq!(ErrorCode::NetworkError.code(), 9003);
        assert_eq!(ErrorCode::TimeoutError.code(), 9004);
        assert_eq!(ErrorCode::ConfigError.code(), 9005);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::OrderNotFound.is_success());
        assert!(!ErrorCode::InternalError.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::OrderNotFound));
        assert_eq!(ErrorCode::try_from(2001), Ok(ErrorCode::CouponNotFound));
        assert_eq!(ErrorCode::try_from(4101), Ok(ErrorCode::MotoboyNotFound));
        assert_eq!(ErrorCode::try_from(5002), Ok(ErrorCode::DuplicateOrderEntry));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn test_from_error_code_to_u16() {
        let code: u16 = ErrorCode::Success.into();
        assert_eq!(code, 0);

        let code: u16 = ErrorCode::OrderNotFound.into();
        assert_eq!(code, 1001);

        let code: u16 = ErrorCode::InternalError.into();
        assert_eq!(code, 9001);
    }

    #[test]
    fn test_serialize() {
        let code = ErrorCode::NotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "3");

        let code = ErrorCode::OrderNotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "1001");

        let code = ErrorCode::Success;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "0");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("0").unwrap();
        assert_eq!(code, ErrorCode::Success);

        let code: ErrorCode = serde_json::from_str("3").unwrap();
        assert_eq!(code, ErrorCode::NotFound);

        let code: ErrorCode = serde_json::from_str("1001").unwrap();
        assert_eq!(code, ErrorCode::OrderNotFound);

        let code: ErrorCode = serde_json::from_str("9001").unwrap();
        assert_eq!(code, ErrorCode::InternalError);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::NotFound), "3");
        assert_eq!(format!("{}", ErrorCode::OrderNotFound), "1001");
        assert_eq!(format!("{}", ErrorCode::InternalError), "9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::Success.message(),
            "Operation completed successfully"
        );
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(ErrorCode::OrderNotFound.message(), "Order not found");
        assert_eq!(
            ErrorCode::MotoboyRequired.message(),
            "A motoboy must be assigned before dispatch"
        );
        assert_eq!(ErrorCode::InternalError.message(), "Internal server error");
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }

    #[test]
    fn test_roundtrip() {
        // Test that serialization -> deserialization roundtrip works
        let codes = [
            ErrorCode::Success,
            ErrorCode::OrderNotFound,
            ErrorCode::CouponInactive,
            ErrorCode::DuplicateOrderEntry,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }

    #[test]
    fn test_debug() {
        // Test that Debug derive works correctly
        let debug_str = format!("{:?}", ErrorCode::Success);
        assert_eq!(debug_str, "Success");

        let debug_str = format!("{:?}", ErrorCode::OrderNotFound);
        assert_eq!(debug_str, "OrderNotFound");
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(ErrorCode::Success);
        set.insert(ErrorCode::NotFound);
        set.insert(ErrorCode::Success); // Duplicate

        assert_eq!(set.len(), 2);
        assert!(set.contains(&ErrorCode::Success));
        assert!(set.contains(&ErrorCode::NotFound));
    }
}
