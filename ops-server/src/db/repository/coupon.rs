//! Coupon Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Coupon, CouponCreate, CouponUpdate};
use crate::pricing::normalize_code;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const COUPON_TABLE: &str = "coupon";

#[derive(Clone)]
pub struct CouponRepository {
    base: BaseRepository,
}

impl CouponRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all coupons
    pub async fn find_all(&self) -> RepoResult<Vec<Coupon>> {
        let coupons: Vec<Coupon> = self
            .base
            .db()
            .query("SELECT * FROM coupon ORDER BY code")
            .await?
            .take(0)?;
        Ok(coupons)
    }

    /// Find coupon by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Coupon>> {
        let record: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let coupon: Option<Coupon> = self.base.db().select(record).await?;
        Ok(coupon)
    }

    /// Case-insensitive code lookup (codes are stored upper-cased)
    pub async fn find_by_code(&self, code: &str) -> RepoResult<Option<Coupon>> {
        let normalized = normalize_code(code);
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM coupon WHERE code = $code LIMIT 1")
            .bind(("code", normalized))
            .await?;
        let coupons: Vec<Coupon> = result.take(0)?;
        Ok(coupons.into_iter().next())
    }

    /// Create a new coupon
    pub async fn create(&self, data: CouponCreate) -> RepoResult<Coupon> {
        let code = normalize_code(&data.code);
        if code.is_empty() {
            return Err(RepoError::Validation("Coupon code is required".to_string()));
        }
        if self.find_by_code(&code).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Coupon '{}' already exists",
                code
            )));
        }

        let mut coupon = Coupon::new(code, data.discount_type, data.discount_value);
        if let Some(active) = data.active {
            coupon.active = active;
        }

        let created: Option<Coupon> = self
            .base
            .db()
            .create(COUPON_TABLE)
            .content(coupon)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create coupon".to_string()))
    }

    /// Update a coupon
    pub async fn update(&self, id: &str, data: CouponUpdate) -> RepoResult<Coupon> {
        let record: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Coupon {} not found", id)))?;

        let code = data.code.map(|c| normalize_code(&c));
        if let Some(ref new_code) = code
            && new_code != &existing.code
            && self.find_by_code(new_code).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Coupon '{}' already exists",
                new_code
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $record SET
                    code = $code OR code,
                    discount_type = $discount_type OR discount_type,
                    discount_value = IF $has_value THEN $discount_value ELSE discount_value END,
                    active = IF $has_active THEN $active ELSE active END
                RETURN AFTER"#,
            )
            .bind(("record", record))
            .bind(("code", code))
            .bind(("discount_type", data.discount_type))
            .bind(("has_value", data.discount_value.is_some()))
            .bind(("discount_value", data.discount_value))
            .bind(("has_active", data.active.is_some()))
            .bind(("active", data.active))
            .await?;

        result
            .take::<Option<Coupon>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Coupon {} not found", id)))
    }

    /// Hard delete a coupon
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let record: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Coupon {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $record")
            .bind(("record", record))
            .await?;
        Ok(true)
    }
}
