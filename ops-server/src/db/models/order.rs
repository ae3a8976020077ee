//! Order Model
//!
//! Orders snapshot everything they need at creation time (item names,
//! unit prices, extras, fees) so later catalog edits never alter a
//! historic order. Orders are never deleted; `Finalizado` is terminal.

use super::serde_record;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type OrderId = RecordId;

// =============================================================================
// Enums
// =============================================================================

/// Fulfillment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Delivery,
    Pickup,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Delivery => "delivery",
            OrderType::Pickup => "pickup",
        }
    }
}

/// Order lifecycle status
///
/// The wire format keeps the storefront labels; transition rules live in
/// `crate::orders::lifecycle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Em Preparo")]
    Preparing,
    #[serde(rename = "Pronto para Retirada")]
    ReadyForPickup,
    #[serde(rename = "Saiu para Entrega")]
    OutForDelivery,
    #[serde(rename = "Finalizado")]
    Finalized,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Preparing => "Em Preparo",
            OrderStatus::ReadyForPickup => "Pronto para Retirada",
            OrderStatus::OutForDelivery => "Saiu para Entrega",
            OrderStatus::Finalized => "Finalizado",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Finalized)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Order
// =============================================================================

/// Extra on an order line (name and price captured at order time)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemExtra {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
}

/// Order line snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Null for synthetic half-and-half combos
    #[serde(default)]
    pub item_id: Option<String>,
    /// "pizza" | "drink" | "dessert" | "halfAndHalf" (pass-through)
    pub item_type: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    #[serde(default)]
    pub extras: Vec<OrderItemExtra>,
    /// (unit_price + sum of extras) * quantity, set by the pricing module
    #[serde(default)]
    pub line_total: f64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_record::option")]
    pub id: Option<OrderId>,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    /// Street address; None marks a pickup order
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    pub order_type: OrderType,
    pub payment_method: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Pre-fee, pre-discount subtotal
    pub total_price: f64,
    #[serde(default)]
    pub delivery_fee: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub coupon_code: Option<String>,
    /// Amount due: max(0, total_price + delivery_fee - discount)
    pub final_price: f64,
    pub status: OrderStatus,
    #[serde(default, with = "serde_record::option")]
    pub motoboy_id: Option<RecordId>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub finalized_at: Option<i64>,
}

impl Order {
    /// "order:xyz" form of the id, when persisted
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_string())
    }
}

// =============================================================================
// API Request Types
// =============================================================================

/// Order line in a create payload (storefront keys)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    #[serde(default)]
    pub item_id: Option<String>,
    pub item_type: String,
    pub item_name: String,
    pub quantity: u32,
    pub price_per_item: f64,
    #[serde(default)]
    pub extras: Vec<OrderItemExtra>,
}

/// Checkout payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    pub order_type: OrderType,
    pub payment_method: String,
    #[serde(default)]
    pub items: Vec<OrderItemInput>,
    #[serde(default)]
    pub coupon_code: Option<String>,
}

/// Status transition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub new_status: OrderStatus,
    /// "motoboy:xyz", required when moving a delivery order out the door
    #[serde(default)]
    pub motoboy_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_to_storefront_labels() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            "\"Em Preparo\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::OutForDelivery).unwrap(),
            "\"Saiu para Entrega\""
        );
        let back: OrderStatus = serde_json::from_str("\"Finalizado\"").unwrap();
        assert_eq!(back, OrderStatus::Finalized);
    }

    #[test]
    fn test_status_update_uses_camel_case_keys() {
        let update: OrderStatusUpdate = serde_json::from_str(
            r#"{"newStatus": "Saiu para Entrega", "motoboyId": "motoboy:joao"}"#,
        )
        .unwrap();
        assert_eq!(update.new_status, OrderStatus::OutForDelivery);
        assert_eq!(update.motoboy_id.as_deref(), Some("motoboy:joao"));
    }

    #[test]
    fn test_order_deserializes_string_record_ids() {
        let json = r#"{
            "id": "order:abc123",
            "customer_name": "Maria",
            "order_type": "delivery",
            "payment_method": "pix",
            "total_price": 78.0,
            "final_price": 84.0,
            "status": "Em Preparo",
            "motoboy_id": "motoboy:joao"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id_string().as_deref(), Some("order:abc123"));
        assert_eq!(order.motoboy_id.as_ref().map(|m| m.to_string()).as_deref(), Some("motoboy:joao"));
        assert!(order.items.is_empty());
        assert_eq!(order.delivery_fee, 0.0);
    }

    #[test]
    fn test_create_payload_accepts_storefront_item_keys() {
        let json = r#"{
            "customerName": "Ana",
            "orderType": "pickup",
            "paymentMethod": "dinheiro",
            "items": [
                {"item_id": "product:margherita", "item_type": "pizza",
                 "item_name": "Margherita", "quantity": 2, "price_per_item": 30.0,
                 "extras": [{"id": "bacon", "name": "Bacon", "price": 5.0}]}
            ]
        }"#;
        let payload: OrderCreate = serde_json::from_str(json).unwrap();
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.items[0].price_per_item, 30.0);
        assert_eq!(payload.items[0].extras[0].name, "Bacon");
        assert!(payload.coupon_code.is_none());
    }
}
