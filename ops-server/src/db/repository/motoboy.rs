//! Motoboy Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Motoboy, MotoboyCreate, MotoboyUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const MOTOBOY_TABLE: &str = "motoboy";

#[derive(Clone)]
pub struct MotoboyRepository {
    base: BaseRepository,
}

impl MotoboyRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all couriers
    pub async fn find_all(&self) -> RepoResult<Vec<Motoboy>> {
        let motoboys: Vec<Motoboy> = self
            .base
            .db()
            .query("SELECT * FROM motoboy ORDER BY name")
            .await?
            .take(0)?;
        Ok(motoboys)
    }

    /// Find couriers available for dispatch
    pub async fn find_active(&self) -> RepoResult<Vec<Motoboy>> {
        let motoboys: Vec<Motoboy> = self
            .base
            .db()
            .query("SELECT * FROM motoboy WHERE active = true ORDER BY name")
            .await?
            .take(0)?;
        Ok(motoboys)
    }

    /// Find courier by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Motoboy>> {
        let record: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let motoboy: Option<Motoboy> = self.base.db().select(record).await?;
        Ok(motoboy)
    }

    /// Create a new courier
    pub async fn create(&self, data: MotoboyCreate) -> RepoResult<Motoboy> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("Courier name is required".to_string()));
        }

        let mut motoboy = Motoboy::new(data.name.trim().to_string(), data.phone);
        if let Some(active) = data.active {
            motoboy.active = active;
        }

        let created: Option<Motoboy> = self
            .base
            .db()
            .create(MOTOBOY_TABLE)
            .content(motoboy)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create motoboy".to_string()))
    }

    /// Update a courier
    pub async fn update(&self, id: &str, data: MotoboyUpdate) -> RepoResult<Motoboy> {
        let record: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Motoboy {} not found", id)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $record SET
                    name = $name OR name,
                    phone = $phone OR phone,
                    active = IF $has_active THEN $active ELSE active END
                RETURN AFTER"#,
            )
            .bind(("record", record))
            .bind(("name", data.name))
            .bind(("phone", data.phone))
            .bind(("has_active", data.active.is_some()))
            .bind(("active", data.active))
            .await?;

        result
            .take::<Option<Motoboy>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Motoboy {} not found", id)))
    }

    /// Hard delete a courier
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let record: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Motoboy {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $record")
            .bind(("record", record))
            .await?;
        Ok(true)
    }
}
