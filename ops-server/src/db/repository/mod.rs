//! Repository Module
//!
//! CRUD operations over the SurrealDB tables.
//!
//! ID convention: the whole stack uses "table:id" strings. Parse with
//! `"product:abc".parse::<RecordId>()`, build with
//! `RecordId::from_table_key(table, key)`, and pass `RecordId` values
//! straight to `db.select` / `db.delete` / query binds.

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
pub use cash_flow::{CashFlowRepository, CashFlowSummary};
pub use coupon::CouponRepository;
pub use delivery_fee::DeliveryFeeRepository;
pub use motoboy::MotoboyRepository;
pub use order::{OrderRepository, ReportStats};
pub use product::ProductRepository;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => {
                AppError::with_message(shared::ErrorCode::NotFound, msg)
            }
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
