//! Cash Flow Model

use super::serde_record;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type CashFlowEntryId = RecordId;

/// Ledger entry direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashFlowKind {
    Income,
    Expense,
}

/// Ledger entry
///
/// Income entries for finalized orders carry the order id; the finalize
/// transaction guarantees at most one entry per order. Expense entries
/// are appended manually by staff and have no order link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowEntry {
    #[serde(default, with = "serde_record::option")]
    pub id: Option<CashFlowEntryId>,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: CashFlowKind,
    pub amount: f64,
    #[serde(default, with = "serde_record::option")]
    pub order_id: Option<RecordId>,
    /// Transaction timestamp (Unix millis)
    pub occurred_at: i64,
    #[serde(default)]
    pub created_at: i64,
}

/// Manual ledger append payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowEntryCreate {
    pub description: String,
    #[serde(rename = "type")]
    pub kind: CashFlowKind,
    pub amount: f64,
    /// Transaction day as "YYYY-MM-DD"; defaults to today
    #[serde(default)]
    pub date: Option<String>,
}
