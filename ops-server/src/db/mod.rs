//! Database Module
//!
//! Owns the embedded SurrealDB (RocksDB) instance and schema definition.

pub mod models;
pub mod repository;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "forno";
const DATABASE: &str = "ops";

/// Database service owning the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database under the given path
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database connection established (SurrealDB RocksDB)");

        let service = Self { db };
        service.define_schema().await?;
        Ok(service)
    }

    /// Declare indexes; statements are idempotent across restarts
    async fn define_schema(&self) -> Result<(), AppError> {
        self.db
            .query(
                r#"
                DEFINE INDEX IF NOT EXISTS coupon_code ON TABLE coupon COLUMNS code UNIQUE;
                DEFINE INDEX IF NOT EXISTS delivery_fee_neighborhood ON TABLE delivery_fee COLUMNS neighborhood UNIQUE;
                DEFINE INDEX IF NOT EXISTS cash_flow_order ON TABLE cash_flow COLUMNS order_id;
                "#,
            )
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
        tracing::info!("Database schema defined");
        Ok(())
    }
}
