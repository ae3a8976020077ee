//! Product Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const PRODUCT_TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all products
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY category, name")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find products visible on the storefront
    pub async fn find_available(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE available = true ORDER BY category, name")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let record: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let product: Option<Product> = self.base.db().select(record).await?;
        Ok(product)
    }

    /// Find product by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Product>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM product WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await?;
        let products: Vec<Product> = result.take(0)?;
        Ok(products.into_iter().next())
    }

    /// Create a new product
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Product '{}' already exists",
                data.name
            )));
        }

        let mut product = Product::new(data.name, data.category, data.price);
        product.description = data.description;
        if let Some(available) = data.available {
            product.available = available;
        }
        if let Some(extras) = data.extras {
            product.extras = extras;
        }

        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Update a product
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let record: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))?;

        // Check duplicate name if changing
        if let Some(ref new_name) = data.name
            && new_name != &existing.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Product '{}' already exists",
                new_name
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $record SET
                    name = $name OR name,
                    category = $category OR category,
                    price = IF $has_price THEN $price ELSE price END,
                    description = $description OR description,
                    available = IF $has_available THEN $available ELSE available END,
                    extras = IF $has_extras THEN $extras ELSE extras END
                RETURN AFTER"#,
            )
            .bind(("record", record))
            .bind(("name", data.name))
            .bind(("category", data.category))
            .bind(("has_price", data.price.is_some()))
            .bind(("price", data.price))
            .bind(("description", data.description))
            .bind(("has_available", data.available.is_some()))
            .bind(("available", data.available))
            .bind(("has_extras", data.extras.is_some()))
            .bind(("extras", data.extras))
            .await?;

        result
            .take::<Option<Product>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Hard delete a product
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let record: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $record")
            .bind(("record", record))
            .await?;
        Ok(true)
    }
}
