//! Order Service
//!
//! Orchestrates checkout and lifecycle transitions: payload validation,
//! coupon resolution, server-side pricing, persistence, the
//! finalization ledger entry and the customer/courier texts. Handlers
//! stay thin; everything stateful happens here.

use std::sync::Arc;

use surrealdb::RecordId;

use crate::core::ServerState;
use crate::db::models::{
    Motoboy, Order, OrderCreate, OrderItem, OrderStatus, OrderStatusUpdate, OrderType,
};
use crate::db::repository::{
    CouponRepository, DeliveryFeeRepository, MotoboyRepository, OrderRepository,
};
use crate::notify::{Notifier, messages, normalize_phone, send_best_effort};
use crate::orders::lifecycle::{Transition, check_transition};
use crate::pricing::{
    CouponOutcome, calculate_order_totals, coupon_discount, normalize_code, subtotal_of, to_f64,
    validate_price, validate_quantity,
};
use shared::util::now_millis;
use shared::{AppError, AppResult, ErrorCode};

#[derive(Clone)]
pub struct OrderService {
    config: crate::core::Config,
    orders: OrderRepository,
    coupons: CouponRepository,
    fees: DeliveryFeeRepository,
    motoboys: MotoboyRepository,
    notifier: Arc<dyn Notifier>,
}

impl OrderService {
    pub fn new(state: &ServerState) -> Self {
        Self {
            config: state.config.clone(),
            orders: OrderRepository::new(state.db.clone()),
            coupons: CouponRepository::new(state.db.clone()),
            fees: DeliveryFeeRepository::new(state.db.clone()),
            motoboys: MotoboyRepository::new(state.db.clone()),
            notifier: state.notifier.clone(),
        }
    }

    /// Checkout: validate, price, persist and confirm a new order
    pub async fn create(&self, payload: OrderCreate) -> AppResult<Order> {
        // 1. Validate the envelope
        let customer_name = payload.customer_name.trim().to_string();
        if customer_name.is_empty() {
            return Err(AppError::validation("Customer name is required"));
        }
        if payload.payment_method.trim().is_empty() {
            return Err(AppError::validation("Payment method is required"));
        }
        if payload.items.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty));
        }

        // 2. Validate and snapshot the lines
        let mut items = Vec::with_capacity(payload.items.len());
        for input in payload.items {
            if input.item_name.trim().is_empty() {
                return Err(AppError::validation("Item name is required"));
            }
            validate_quantity(input.quantity)?;
            validate_price(input.price_per_item, "price_per_item")?;
            for extra in &input.extras {
                validate_price(extra.price, "extra price")?;
            }
            items.push(OrderItem {
                item_id: input.item_id,
                item_type: input.item_type,
                name: input.item_name,
                quantity: input.quantity,
                unit_price: input.price_per_item,
                extras: input.extras,
                line_total: 0.0,
            });
        }

        // 3. Delivery orders need an address and a covered neighborhood
        let delivery_fee = match payload.order_type {
            OrderType::Delivery => {
                if payload.address.as_deref().unwrap_or("").trim().is_empty() {
                    return Err(AppError::validation("Delivery orders require an address"));
                }
                let neighborhood = payload
                    .neighborhood
                    .as_deref()
                    .unwrap_or("")
                    .trim()
                    .to_string();
                if neighborhood.is_empty() {
                    return Err(AppError::validation(
                        "Delivery orders require a neighborhood",
                    ));
                }
                self.fees
                    .find_by_neighborhood(&neighborhood)
                    .await?
                    .ok_or_else(|| {
                        AppError::new(ErrorCode::NeighborhoodNotCovered)
                            .with_detail("neighborhood", neighborhood.clone())
                    })?
                    .fee
            }
            OrderType::Pickup => 0.0,
        };

        // 4. Resolve the optional coupon against the pre-fee subtotal
        let subtotal = subtotal_of(&items);
        let coupon_code = payload
            .coupon_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(normalize_code);
        let discount = match &coupon_code {
            Some(code) => {
                let found = self.coupons.find_by_code(code).await?;
                match CouponOutcome::classify(found) {
                    CouponOutcome::Valid(coupon) => to_f64(coupon_discount(&coupon, subtotal)),
                    CouponOutcome::NotFound => {
                        return Err(AppError::new(ErrorCode::CouponNotFound)
                            .with_detail("code", code.clone()));
                    }
                    CouponOutcome::Inactive(_) => {
                        return Err(AppError::new(ErrorCode::CouponInactive)
                            .with_detail("code", code.clone()));
                    }
                }
            }
            None => 0.0,
        };

        // 5. Price server-side and persist with the initial status
        let totals = calculate_order_totals(&mut items, delivery_fee, discount);
        let order = Order {
            id: None,
            customer_name,
            customer_phone: payload
                .customer_phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            address: payload
                .address
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
            neighborhood: payload
                .neighborhood
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            order_type: payload.order_type,
            payment_method: payload.payment_method.trim().to_string(),
            items,
            total_price: totals.subtotal,
            delivery_fee: totals.delivery_fee,
            discount: totals.discount,
            coupon_code,
            final_price: totals.final_price,
            status: OrderStatus::Preparing,
            motoboy_id: None,
            created_at: now_millis(),
            finalized_at: None,
        };
        let created = self.orders.create(order).await?;

        tracing::info!(
            order_id = ?created.id_string(),
            order_type = %created.order_type.as_str(),
            final_price = created.final_price,
            "Order created"
        );

        // 6. Confirmation text, best effort
        self.notify_customer(
            &created,
            messages::confirmation(&created, &self.config.store_name),
        );

        Ok(created)
    }

    /// Apply a lifecycle transition requested by staff
    pub async fn transition(&self, id: &str, update: OrderStatusUpdate) -> AppResult<Order> {
        // Finalization carries a ledger side effect, routed separately
        if update.new_status == OrderStatus::Finalized {
            return self.finalize(id).await;
        }

        let order = self.load(id).await?;

        // An explicitly supplied courier must exist
        let motoboy_record = match update.motoboy_id.as_deref().map(str::trim) {
            Some(motoboy_id) if !motoboy_id.is_empty() => {
                let record: RecordId = motoboy_id.parse().map_err(|_| {
                    AppError::validation(format!("Invalid motoboy ID: {}", motoboy_id))
                })?;
                self.motoboys.find_by_id(motoboy_id).await?.ok_or_else(|| {
                    AppError::with_message(
                        ErrorCode::MotoboyNotFound,
                        format!("Motoboy {} not found", motoboy_id),
                    )
                })?;
                Some(record)
            }
            _ => None,
        };

        let has_motoboy = motoboy_record.is_some() || order.motoboy_id.is_some();
        if check_transition(&order, update.new_status, has_motoboy)? == Transition::NoOp {
            return Ok(order);
        }

        let record = self.record_id(&order)?;
        let updated = self
            .orders
            .update_status(&record, update.new_status, motoboy_record)
            .await?;

        tracing::info!(
            order_id = %record,
            from = %order.status,
            to = %updated.status,
            "Order status updated"
        );

        match updated.status {
            OrderStatus::ReadyForPickup => {
                self.notify_customer(
                    &updated,
                    messages::ready_for_pickup(&updated, &self.config.store_name),
                );
            }
            OrderStatus::OutForDelivery => {
                self.notify_customer(&updated, messages::out_for_delivery(&updated));
                self.notify_courier(&updated).await;
            }
            _ => {}
        }

        Ok(updated)
    }

    /// Move an order to `Finalizado`, recording its income exactly once.
    ///
    /// Safe to call repeatedly; a finalized order is returned unchanged.
    pub async fn finalize(&self, id: &str) -> AppResult<Order> {
        let order = self.load(id).await?;

        if order.status == OrderStatus::Finalized {
            tracing::debug!(order_id = %id, "Order already finalized, nothing to do");
            return Ok(order);
        }
        check_transition(&order, OrderStatus::Finalized, false)?;

        let record = self.record_id(&order)?;
        let description = format!("Pedido de {}", order.customer_name);
        let updated = self
            .orders
            .finalize(&record, description, order.final_price, now_millis())
            .await?;

        tracing::info!(
            order_id = %record,
            amount = updated.final_price,
            "Order finalized, income recorded"
        );

        Ok(updated)
    }

    async fn load(&self, id: &str) -> AppResult<Order> {
        let order = self.orders.find_by_id(id).await?.ok_or_else(|| {
            AppError::with_message(ErrorCode::OrderNotFound, format!("Order {} not found", id))
        })?;
        Ok(order)
    }

    fn record_id(&self, order: &Order) -> AppResult<RecordId> {
        order
            .id
            .clone()
            .ok_or_else(|| AppError::internal("Loaded order carries no record id"))
    }

    fn notify_customer(&self, order: &Order, body: String) {
        let Some(raw) = &order.customer_phone else {
            return;
        };
        match normalize_phone(raw, &self.config.phone_config()) {
            Some(phone) => send_best_effort(self.notifier.clone(), phone, body),
            None => tracing::warn!(
                target: "notify",
                order_id = ?order.id_string(),
                "Customer phone has no digits, skipping text"
            ),
        }
    }

    async fn notify_courier(&self, order: &Order) {
        let Some(motoboy_id) = &order.motoboy_id else {
            return;
        };
        let motoboy: Motoboy = match self.motoboys.find_by_id(&motoboy_id.to_string()).await {
            Ok(Some(m)) => m,
            Ok(None) => {
                tracing::warn!(
                    target: "notify",
                    motoboy_id = %motoboy_id,
                    "Assigned motoboy no longer exists, skipping courier text"
                );
                return;
            }
            Err(e) => {
                tracing::warn!(
                    target: "notify",
                    motoboy_id = %motoboy_id,
                    error = %e,
                    "Motoboy lookup failed, skipping courier text"
                );
                return;
            }
        };

        let body = messages::courier_sheet(order, &self.config.public_url);
        match normalize_phone(&motoboy.phone, &self.config.phone_config()) {
            Some(phone) => send_best_effort(self.notifier.clone(), phone, body),
            None => tracing::warn!(
                target: "notify",
                motoboy_id = %motoboy_id,
                "Motoboy phone has no digits, skipping text"
            ),
        }
    }
}
