//! Coupon Model

use super::serde_record;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type CouponId = RecordId;

/// Discount kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponKind {
    /// Flat amount taken off the subtotal
    Fixed,
    /// Percentage of the pre-fee subtotal
    Percentage,
}

/// Discount coupon
///
/// Codes are unique and stored upper-cased; lookups normalize before
/// matching so "pizza10" and "PIZZA10" hit the same record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    #[serde(default, with = "serde_record::option")]
    pub id: Option<CouponId>,
    pub code: String,
    pub discount_type: CouponKind,
    pub discount_value: f64,
    #[serde(default = "default_true", deserialize_with = "serde_record::bool_true")]
    pub active: bool,
    #[serde(default)]
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

impl Coupon {
    pub fn new(code: String, discount_type: CouponKind, discount_value: f64) -> Self {
        Self {
            id: None,
            code: code.trim().to_uppercase(),
            discount_type,
            discount_value,
            active: true,
            created_at: shared::util::now_millis(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponCreate {
    pub code: String,
    pub discount_type: CouponKind,
    pub discount_value: f64,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponUpdate {
    pub code: Option<String>,
    pub discount_type: Option<CouponKind>,
    pub discount_value: Option<f64>,
    pub active: Option<bool>,
}
