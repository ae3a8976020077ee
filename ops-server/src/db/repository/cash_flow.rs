//! Cash Flow Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{CashFlowEntry, CashFlowKind};
use crate::pricing::{to_decimal, to_f64};
use rust_decimal::Decimal;
use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const CASH_FLOW_TABLE: &str = "cash_flow";

/// Aggregated view of a ledger window
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CashFlowSummary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

impl CashFlowSummary {
    /// Totals are accumulated in fixed-point and converted once at the end
    pub fn from_entries(entries: &[CashFlowEntry]) -> Self {
        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;
        for entry in entries {
            match entry.kind {
                CashFlowKind::Income => income += to_decimal(entry.amount),
                CashFlowKind::Expense => expense += to_decimal(entry.amount),
            }
        }
        Self {
            income: to_f64(income),
            expense: to_f64(expense),
            balance: to_f64(income - expense),
        }
    }
}

#[derive(Clone)]
pub struct CashFlowRepository {
    base: BaseRepository,
}

impl CashFlowRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Record a manual ledger entry
    pub async fn create(&self, entry: CashFlowEntry) -> RepoResult<CashFlowEntry> {
        if entry.description.trim().is_empty() {
            return Err(RepoError::Validation(
                "Entry description is required".to_string(),
            ));
        }
        if !entry.amount.is_finite() || entry.amount <= 0.0 {
            return Err(RepoError::Validation(
                "Entry amount must be positive".to_string(),
            ));
        }

        let created: Option<CashFlowEntry> = self
            .base
            .db()
            .create(CASH_FLOW_TABLE)
            .content(entry)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create cash flow entry".to_string()))
    }

    /// Entries inside [start, end), newest first
    pub async fn find_range(&self, start: i64, end: i64) -> RepoResult<Vec<CashFlowEntry>> {
        let entries: Vec<CashFlowEntry> = self
            .base
            .db()
            .query(
                "SELECT * FROM cash_flow WHERE occurred_at >= $start AND occurred_at < $end ORDER BY occurred_at DESC",
            )
            .bind(("start", start))
            .bind(("end", end))
            .await?
            .take(0)?;
        Ok(entries)
    }

    /// Income entry tied to an order, if one was ever recorded
    pub async fn find_by_order(&self, order_id: &RecordId) -> RepoResult<Option<CashFlowEntry>> {
        let entries: Vec<CashFlowEntry> = self
            .base
            .db()
            .query("SELECT * FROM cash_flow WHERE order_id = $order LIMIT 1")
            .bind(("order", order_id.clone()))
            .await?
            .take(0)?;
        Ok(entries.into_iter().next())
    }
}

// ==================== Tests ====================
