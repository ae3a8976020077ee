//! Order Lifecycle Rules
//!
//! Pure transition checks for the order status machine:
//!
//! ```text
//! Em Preparo ──> Pronto para Retirada (pickup)  ──┐
//!     │                                           ├──> Finalizado (terminal)
//!     └────────> Saiu para Entrega (delivery)  ───┘
//! ```
//!
//! `Em Preparo` is also reachable from any non-terminal status as a
//! manual staff revert. Side effects (ledger entry, notifications) live
//! in the service layer.

use crate::db::models::{Order, OrderStatus, OrderType};
use shared::{AppError, AppResult, ErrorCode};

/// Outcome of a transition check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The status changes and its side effects should fire
    Apply,
    /// Same status submitted again, nothing to do
    NoOp,
}

/// Validate a requested status change against the lifecycle rules.
///
/// `has_motoboy` is true when the request carries a courier id or the
/// order already has one assigned.
pub fn check_transition(
    order: &Order,
    new_status: OrderStatus,
    has_motoboy: bool,
) -> AppResult<Transition> {
    // Re-submitting the current status is a no-op, including a second
    // finalize on an already finalized order
    if order.status == new_status {
        return Ok(Transition::NoOp);
    }

    if order.status.is_terminal() {
        return Err(AppError::new(ErrorCode::OrderAlreadyFinalized)
            .with_detail("order_id", order.id_string().unwrap_or_default()));
    }

    match new_status {
        // Manual revert, allowed from any non-terminal status
        OrderStatus::Preparing => Ok(Transition::Apply),

        OrderStatus::ReadyForPickup => {
            if order.order_type != OrderType::Pickup {
                return Err(AppError::with_message(
                    ErrorCode::WrongOrderType,
                    "Only pickup orders can be marked ready for pickup",
                ));
            }
            Ok(Transition::Apply)
        }

        OrderStatus::OutForDelivery => {
            if order.order_type != OrderType::Delivery {
                return Err(AppError::with_message(
                    ErrorCode::WrongOrderType,
                    "Only delivery orders can go out for delivery",
                ));
            }
            if !has_motoboy {
                return Err(AppError::new(ErrorCode::MotoboyRequired));
            }
            Ok(Transition::Apply)
        }

        OrderStatus::Finalized => Ok(Transition::Apply),
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_order(order_type: OrderType, status: OrderStatus) -> Order {
        Order {
            id: None,
            customer_name: "Ana".to_string(),
            customer_phone: Some("(11) 98765-4321".to_string()),
            address: match order_type {
                OrderType::Delivery => Some("Rua das Flores, 123".to_string()),
                OrderType::Pickup => None,
            },
            neighborhood: match order_type {
                OrderType::Delivery => Some("Centro".to_string()),
                OrderType::Pickup => None,
            },
            order_type,
            payment_method: "pix".to_string(),
            items: vec![],
            total_price: 78.0,
            delivery_fee: 6.0,
            discount: 0.0,
            coupon_code: None,
            final_price: 84.0,
            status,
            motoboy_id: None,
            created_at: 0,
            finalized_at: None,
        }
    }

    #[test]
    fn test_pickup_order_becomes_ready() {
        let order = make_order(OrderType::Pickup, OrderStatus::Preparing);
        let result = check_transition(&order, OrderStatus::ReadyForPickup, false);
        assert_eq!(result.unwrap(), Transition::Apply);
    }

    #[test]
    fn test_delivery_order_cannot_be_ready_for_pickup() {
        let order = make_order(OrderType::Delivery, OrderStatus::Preparing);
        let err = check_transition(&order, OrderStatus::ReadyForPickup, false).unwrap_err();
        assert_eq!(err.code, ErrorCode::WrongOrderType);
    }

    #[test]
    fn test_delivery_dispatch_requires_motoboy() {
        let order = make_order(OrderType::Delivery, OrderStatus::Preparing);
        let err = check_transition(&order, OrderStatus::OutForDelivery, false).unwrap_err();
        assert_eq!(err.code, ErrorCode::MotoboyRequired);

        let result = check_transition(&order, OrderStatus::OutForDelivery, true);
        assert_eq!(result.unwrap(), Transition::Apply);
    }

    #[test]
    fn test_pickup_order_cannot_go_out_for_delivery() {
        let order = make_order(OrderType::Pickup, OrderStatus::Preparing);
        let err = check_transition(&order, OrderStatus::OutForDelivery, true).unwrap_err();
        assert_eq!(err.code, ErrorCode::WrongOrderType);
    }

    #[test]
    fn test_finalized_is_terminal() {
        let order = make_order(OrderType::Delivery, OrderStatus::Finalized);
        for target in [
            OrderStatus::Preparing,
            OrderStatus::ReadyForPickup,
            OrderStatus::OutForDelivery,
        ] {
            let err = check_transition(&order, target, true).unwrap_err();
            assert_eq!(err.code, ErrorCode::OrderAlreadyFinalized);
        }
    }

    #[test]
    fn test_refinalizing_is_a_noop() {
        let order = make_order(OrderType::Delivery, OrderStatus::Finalized);
        let result = check_transition(&order, OrderStatus::Finalized, false);
        assert_eq!(result.unwrap(), Transition::NoOp);
    }

    #[test]
    fn test_revert_to_preparing_from_any_non_terminal() {
        let ready = make_order(OrderType::Pickup, OrderStatus::ReadyForPickup);
        assert_eq!(
            check_transition(&ready, OrderStatus::Preparing, false).unwrap(),
            Transition::Apply
        );

        let dispatched = make_order(OrderType::Delivery, OrderStatus::OutForDelivery);
        assert_eq!(
            check_transition(&dispatched, OrderStatus::Preparing, false).unwrap(),
            Transition::Apply
        );
    }

    #[test]
    fn test_same_status_is_a_noop() {
        let order = make_order(OrderType::Delivery, OrderStatus::Preparing);
        let result = check_transition(&order, OrderStatus::Preparing, false);
        assert_eq!(result.unwrap(), Transition::NoOp);
    }

    #[test]
    fn test_any_non_terminal_can_finalize() {
        for (order_type, status) in [
            (OrderType::Pickup, OrderStatus::Preparing),
            (OrderType::Pickup, OrderStatus::ReadyForPickup),
            (OrderType::Delivery, OrderStatus::OutForDelivery),
        ] {
            let order = make_order(order_type, status);
            assert_eq!(
                check_transition(&order, OrderStatus::Finalized, false).unwrap(),
                Transition::Apply
            );
        }
    }
}
