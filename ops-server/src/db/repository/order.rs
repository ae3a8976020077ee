//! Order Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Order, OrderStatus};
use serde::{Deserialize, Serialize};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const ORDER_TABLE: &str = "order";

/// Revenue figures for a reporting window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportStats {
    pub revenue: f64,
    pub order_count: u64,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a priced order
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Page of orders, newest first, optionally filtered by status
    pub async fn find_page(
        &self,
        status: Option<OrderStatus>,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Order>> {
        let mut result = match status {
            Some(status) => {
                self.base
                    .db()
                    .query(
                        "SELECT * FROM order WHERE status = $status ORDER BY created_at DESC LIMIT $limit START $offset",
                    )
                    .bind(("status", status))
                    .bind(("limit", limit))
                    .bind(("offset", offset))
                    .await?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM order ORDER BY created_at DESC LIMIT $limit START $offset")
                    .bind(("limit", limit))
                    .bind(("offset", offset))
                    .await?
            }
        };
        Ok(result.take(0)?)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let record: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let order: Option<Order> = self.base.db().select(record).await?;
        Ok(order)
    }

    /// Move an order to a new status, optionally assigning a courier
    pub async fn update_status(
        &self,
        record: &RecordId,
        status: OrderStatus,
        motoboy_id: Option<RecordId>,
    ) -> RepoResult<Order> {
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $record SET
                    status = $status,
                    motoboy_id = IF $has_motoboy THEN $motoboy ELSE motoboy_id END
                RETURN AFTER"#,
            )
            .bind(("record", record.clone()))
            .bind(("status", status))
            .bind(("has_motoboy", motoboy_id.is_some()))
            .bind(("motoboy", motoboy_id))
            .await?;

        result
            .take::<Option<Order>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", record)))
    }

    /// Finalize an order and record its income in one transaction.
    ///
    /// The ledger lookup guards against a second income entry for the
    /// same order, so retries and concurrent calls stay exactly-once.
    pub async fn finalize(
        &self,
        record: &RecordId,
        description: String,
        amount: f64,
        now: i64,
    ) -> RepoResult<Order> {
        let mut result = self
            .base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $existing = SELECT id FROM cash_flow WHERE order_id = $record LIMIT 1;
                IF count($existing) == 0 THEN
                    CREATE cash_flow CONTENT {
                        description: $description,
                        "type": 'income',
                        amount: $amount,
                        order_id: $record,
                        occurred_at: $now,
                        created_at: $now
                    }
                END;
                UPDATE $record SET
                    status = $status,
                    finalized_at = finalized_at OR $now
                RETURN AFTER;
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("record", record.clone()))
            .bind(("description", description))
            .bind(("amount", amount))
            .bind(("now", now))
            .bind(("status", OrderStatus::Finalized))
            .await?;

        result
            .take::<Option<Order>>(2)?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", record)))
    }

    /// Revenue and volume of finalized orders created inside [start, end)
    pub async fn finalized_stats(&self, start: i64, end: i64) -> RepoResult<ReportStats> {
        let mut result = self
            .base
            .db()
            .query(
                r#"
                LET $finalized = SELECT final_price FROM order
                    WHERE status = $status AND created_at >= $start AND created_at < $end;
                RETURN {
                    revenue: math::sum($finalized.final_price) OR 0,
                    order_count: count($finalized)
                };
                "#,
            )
            .bind(("status", OrderStatus::Finalized))
            .bind(("start", start))
            .bind(("end", end))
            .await?;

        let stats: Option<ReportStats> = result.take(1)?;
        Ok(stats.unwrap_or_default())
    }

    /// Finalized orders created inside [start, end), for item breakdowns
    pub async fn finalized_between(&self, start: i64, end: i64) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                "SELECT * FROM order WHERE status = $status AND created_at >= $start AND created_at < $end",
            )
            .bind(("status", OrderStatus::Finalized))
            .bind(("start", start))
            .bind(("end", end))
            .await?
            .take(0)?;
        Ok(orders)
    }
}
