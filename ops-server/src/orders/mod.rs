//! Order Lifecycle Module
//!
//! - **lifecycle**: pure status transition rules
//! - **service**: checkout, transitions, finalization and their side
//!   effects (ledger entry, customer/courier texts)

pub mod lifecycle;
pub mod service;

pub use lifecycle::{Transition, check_transition};
pub use service::OrderService;
