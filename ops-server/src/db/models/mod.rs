//! Database Models

// Serde helpers
pub mod serde_record;

// Catalog
pub mod coupon;
pub mod product;

// Delivery
pub mod delivery_fee;
pub mod motoboy;

// Orders
pub mod order;

// Ledger
pub mod cash_flow;

// Re-exports
pub use cash_flow::{CashFlowEntry, CashFlowEntryCreate, CashFlowKind};
pub use coupon::{Coupon, CouponCreate, CouponKind, CouponUpdate};
pub use delivery_fee::{DeliveryFee, DeliveryFeeCreate, DeliveryFeeUpdate};
pub use motoboy::{Motoboy, MotoboyCreate, MotoboyUpdate};
pub use order::{
    Order, OrderCreate, OrderItem, OrderItemExtra, OrderItemInput, OrderStatus, OrderStatusUpdate,
    OrderType,
};
pub use product::{ExtraOption, Product, ProductCreate, ProductUpdate};
