//! Delivery Fee Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{DeliveryFee, DeliveryFeeCreate, DeliveryFeeUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const DELIVERY_FEE_TABLE: &str = "delivery_fee";

#[derive(Clone)]
pub struct DeliveryFeeRepository {
    base: BaseRepository,
}

impl DeliveryFeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all fees
    pub async fn find_all(&self) -> RepoResult<Vec<DeliveryFee>> {
        let fees: Vec<DeliveryFee> = self
            .base
            .db()
            .query("SELECT * FROM delivery_fee ORDER BY neighborhood")
            .await?
            .take(0)?;
        Ok(fees)
    }

    /// Find fee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DeliveryFee>> {
        let record: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let fee: Option<DeliveryFee> = self.base.db().select(record).await?;
        Ok(fee)
    }

    /// Exact neighborhood lookup
    pub async fn find_by_neighborhood(&self, neighborhood: &str) -> RepoResult<Option<DeliveryFee>> {
        let name = neighborhood.trim().to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM delivery_fee WHERE neighborhood = $neighborhood LIMIT 1")
            .bind(("neighborhood", name))
            .await?;
        let fees: Vec<DeliveryFee> = result.take(0)?;
        Ok(fees.into_iter().next())
    }

    /// Create a new fee
    pub async fn create(&self, data: DeliveryFeeCreate) -> RepoResult<DeliveryFee> {
        let neighborhood = data.neighborhood.trim().to_string();
        if neighborhood.is_empty() {
            return Err(RepoError::Validation(
                "Neighborhood name is required".to_string(),
            ));
        }
        if self.find_by_neighborhood(&neighborhood).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Neighborhood '{}' already exists",
                neighborhood
            )));
        }

        let created: Option<DeliveryFee> = self
            .base
            .db()
            .create(DELIVERY_FEE_TABLE)
            .content(DeliveryFee::new(neighborhood, data.fee))
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create delivery fee".to_string()))
    }

    /// Update a fee
    pub async fn update(&self, id: &str, data: DeliveryFeeUpdate) -> RepoResult<DeliveryFee> {
        let record: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Delivery fee {} not found", id)))?;

        let neighborhood = data.neighborhood.map(|n| n.trim().to_string());
        if let Some(ref new_name) = neighborhood
            && new_name != &existing.neighborhood
            && self.find_by_neighborhood(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Neighborhood '{}' already exists",
                new_name
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $record SET
                    neighborhood = $neighborhood OR neighborhood,
                    fee = IF $has_fee THEN $fee ELSE fee END
                RETURN AFTER"#,
            )
            .bind(("record", record))
            .bind(("neighborhood", neighborhood))
            .bind(("has_fee", data.fee.is_some()))
            .bind(("fee", data.fee))
            .await?;

        result
            .take::<Option<DeliveryFee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Delivery fee {} not found", id)))
    }

    /// Hard delete a fee
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let record: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Delivery fee {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $record")
            .bind(("record", record))
            .await?;
        Ok(true)
    }
}
