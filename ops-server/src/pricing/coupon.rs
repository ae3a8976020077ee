//! Coupon Resolver
//!
//! Business-rule outcomes (unknown code, inactive coupon) are values, not
//! errors; callers translate them to HTTP statuses. Lookups are idempotent
//! and nothing here marks a coupon as redeemed.

use crate::db::models::{Coupon, CouponKind};
use rust_decimal::prelude::*;

use super::money::{round_money, to_decimal};

/// Outcome of a coupon lookup
#[derive(Debug, Clone)]
pub enum CouponOutcome {
    Valid(Coupon),
    NotFound,
    Inactive(Coupon),
}

impl CouponOutcome {
    /// Classify a repository lookup result
    pub fn classify(found: Option<Coupon>) -> Self {
        match found {
            None => CouponOutcome::NotFound,
            Some(c) if !c.active => CouponOutcome::Inactive(c),
            Some(c) => CouponOutcome::Valid(c),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, CouponOutcome::Valid(_))
    }
}

/// Canonical form of a coupon code (codes are stored upper-cased)
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Discount amount for a coupon against the pre-fee subtotal
///
/// Fixed coupons apply verbatim, uncapped; the final price floors at zero
/// downstream. Percentage coupons never touch the delivery fee because the
/// basis here is the pre-fee subtotal.
pub fn coupon_discount(coupon: &Coupon, subtotal: Decimal) -> Decimal {
    match coupon.discount_type {
        CouponKind::Fixed => to_decimal(coupon.discount_value),
        CouponKind::Percentage => {
            round_money(subtotal * to_decimal(coupon.discount_value) / Decimal::ONE_HUNDRED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::money::to_f64;

    fn make_coupon(code: &str, kind: CouponKind, value: f64, active: bool) -> Coupon {
        Coupon {
            id: None,
            code: code.to_string(),
            discount_type: kind,
            discount_value: value,
            active,
            created_at: 0,
        }
    }

    #[test]
    fn test_normalize_code_uppercases_and_trims() {
        assert_eq!(normalize_code(" pizza10 "), "PIZZA10");
        assert_eq!(normalize_code("Promo5"), "PROMO5");
        assert_eq!(normalize_code("JA-MAIUSCULO"), "JA-MAIUSCULO");
    }

    #[test]
    fn test_fixed_discount_is_verbatim_regardless_of_subtotal() {
        let coupon = make_coupon("DEZ", CouponKind::Fixed, 50.0, true);

        // Value applies as-is even when it exceeds the subtotal
        assert_eq!(to_f64(coupon_discount(&coupon, to_decimal(20.0))), 50.0);
        assert_eq!(to_f64(coupon_discount(&coupon, to_decimal(200.0))), 50.0);
    }

    #[test]
    fn test_percentage_discount_scales_with_subtotal() {
        let coupon = make_coupon("PIZZA10", CouponKind::Percentage, 10.0, true);

        assert_eq!(to_f64(coupon_discount(&coupon, to_decimal(100.0))), 10.0);
        assert_eq!(to_f64(coupon_discount(&coupon, to_decimal(78.5))), 7.85);
    }

    #[test]
    fn test_percentage_discount_rounds_half_up() {
        // 15% of 33.33 = 4.9995 -> 5.00
        let coupon = make_coupon("QUINZE", CouponKind::Percentage, 15.0, true);
        assert_eq!(to_f64(coupon_discount(&coupon, to_decimal(33.33))), 5.0);
    }

    #[test]
    fn test_classify_unknown_code() {
        assert!(matches!(CouponOutcome::classify(None), CouponOutcome::NotFound));
    }

    #[test]
    fn test_classify_inactive_coupon() {
        let coupon = make_coupon("VELHO", CouponKind::Fixed, 5.0, false);
        let outcome = CouponOutcome::classify(Some(coupon));
        assert!(matches!(outcome, CouponOutcome::Inactive(_)));
        assert!(!outcome.is_valid());
    }

    #[test]
    fn test_classify_active_coupon() {
        let coupon = make_coupon("NOVO", CouponKind::Percentage, 10.0, true);
        assert!(CouponOutcome::classify(Some(coupon)).is_valid());
    }
}
