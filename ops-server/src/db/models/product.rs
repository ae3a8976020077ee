//! Product Model

use super::serde_record;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type ProductId = RecordId;

/// Catalog product (pizza, drink or dessert)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, with = "serde_record::option")]
    pub id: Option<ProductId>,
    pub name: String,
    /// "pizza" | "drink" | "dessert"
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the product shows on the storefront
    #[serde(default = "default_true", deserialize_with = "serde_record::bool_true")]
    pub available: bool,
    /// Priced add-ons offered with this product
    #[serde(default)]
    pub extras: Vec<ExtraOption>,
    #[serde(default)]
    pub created_at: i64,
}

/// Extra option embedded in a product document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraOption {
    pub id: String,
    pub name: String,
    pub price: f64,
}

fn default_true() -> bool {
    true
}

impl Product {
    pub fn new(name: String, category: String, price: f64) -> Self {
        Self {
            id: None,
            name,
            category,
            price,
            description: None,
            available: true,
            extras: Vec::new(),
            created_at: shared::util::now_millis(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub extras: Option<Vec<ExtraOption>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub extras: Option<Vec<ExtraOption>>,
}
