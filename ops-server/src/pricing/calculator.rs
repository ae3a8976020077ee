//! Order Total Calculator
//!
//! Computes line totals, the order subtotal and the final amount due.
//! Extras multiply by their line quantity; the delivery fee joins after
//! the discount basis is fixed, so percentage coupons never touch it.

use crate::db::models::OrderItem;
use rust_decimal::prelude::*;

use super::money::{round_money, to_decimal, to_f64};

/// Result of order total calculation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderTotals {
    /// Pre-fee, pre-discount subtotal
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub discount: f64,
    /// max(0, subtotal + delivery_fee - discount)
    pub final_price: f64,
}

/// One line's total: (unit_price + sum of extras) * quantity
pub fn line_total(item: &OrderItem) -> Decimal {
    let extras: Decimal = item.extras.iter().map(|e| to_decimal(e.price)).sum();
    let unit = to_decimal(item.unit_price) + extras;
    round_money(unit * Decimal::from(item.quantity))
}

/// Pre-fee subtotal of a set of lines
///
/// Coupon resolution runs against this value before any discount exists.
pub fn subtotal_of(items: &[OrderItem]) -> Decimal {
    items.iter().map(line_total).sum()
}

/// Fill per-line totals and compute the order totals
///
/// `discount` is the already-resolved coupon amount; `delivery_fee` must be
/// zero for pickup orders.
pub fn calculate_order_totals(
    items: &mut [OrderItem],
    delivery_fee: f64,
    discount: f64,
) -> OrderTotals {
    let mut subtotal = Decimal::ZERO;
    for item in items.iter_mut() {
        let line = line_total(item);
        item.line_total = to_f64(line);
        subtotal += line;
    }

    let fee = to_decimal(delivery_fee);
    let disc = to_decimal(discount);
    let final_price = (subtotal + fee - disc).max(Decimal::ZERO);

    OrderTotals {
        subtotal: to_f64(subtotal),
        delivery_fee: to_f64(fee),
        discount: to_f64(disc),
        final_price: to_f64(final_price),
    }
}

// ==================== Tests ====================
