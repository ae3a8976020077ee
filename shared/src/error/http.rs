//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::OrderNotFound
            | Self::CouponNotFound
            | Self::ProductNotFound
            | Self::DeliveryFeeNotFound
            | Self::MotoboyNotFound
            | Self::CashFlowEntryNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict (duplicates and state conflicts)
            Self::AlreadyExists
            | Self::InvalidStatusTransition
            | Self::OrderAlreadyFinalized
            | Self::WrongOrderType
            | Self::CouponCodeExists
            | Self::ProductNameExists
            | Self::NeighborhoodExists
            | Self::DuplicateOrderEntry => StatusCode::CONFLICT,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::NetworkError
            | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
