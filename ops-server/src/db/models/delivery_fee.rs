//! Delivery Fee Model

use super::serde_record;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type DeliveryFeeId = RecordId;

/// Flat per-neighborhood delivery fee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryFee {
    #[serde(default, with = "serde_record::option")]
    pub id: Option<DeliveryFeeId>,
    pub neighborhood: String,
    pub fee: f64,
    #[serde(default)]
    pub created_at: i64,
}

impl DeliveryFee {
    pub fn new(neighborhood: String, fee: f64) -> Self {
        Self {
            id: None,
            neighborhood,
            fee,
            created_at: shared::util::now_millis(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryFeeCreate {
    pub neighborhood: String,
    pub fee: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryFeeUpdate {
    pub neighborhood: Option<String>,
    pub fee: Option<f64>,
}
