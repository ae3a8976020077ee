//! Motoboy (delivery courier) Model

use super::serde_record;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type MotoboyId = RecordId;

/// Delivery courier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motoboy {
    #[serde(default, with = "serde_record::option")]
    pub id: Option<MotoboyId>,
    pub name: String,
    pub phone: String,
    #[serde(default = "default_true", deserialize_with = "serde_record::bool_true")]
    pub active: bool,
    #[serde(default)]
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

impl Motoboy {
    pub fn new(name: String, phone: String) -> Self {
        Self {
            id: None,
            name,
            phone,
            active: true,
            created_at: shared::util::now_millis(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotoboyCreate {
    pub name: String,
    pub phone: String,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotoboyUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub active: Option<bool>,
}
