//! Product Repository

use super::{BaseRepository, PRODUCT_TABLE, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::utils::now_rfc3339;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

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

    /// Find all products, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM products ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let key = strip_table_prefix(PRODUCT_TABLE, id);
        let product: Option<Product> = self.base.db().select((PRODUCT_TABLE, key)).await?;
        Ok(product)
    }

    /// Create a new product
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("name cannot be empty".into()));
        }
        if !data.price.is_finite() || data.price <= 0.0 {
            return Err(RepoError::Validation(format!(
                "price must be positive, got {}",
                data.price
            )));
        }
        if data.stock < 0 {
            return Err(RepoError::Validation(format!(
                "stock cannot be negative, got {}",
                data.stock
            )));
        }

        let now = now_rfc3339();
        let product = Product {
            id: None,
            name: data.name,
            description: data.description,
            image_url: data.image_url.unwrap_or_default(),
            price: data.price,
            category: data.category,
            stock: data.stock,
            sales_count: 0,
            weight: data.weight,
            dimensions: data.dimensions,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };

        let created: Option<Product> = self.base.db().create(PRODUCT_TABLE).content(product).await?;
        created.ok_or_else(|| RepoError::Database("create returned no record".into()))
    }

    /// Partially update a product; untouched fields keep their values
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        if let Some(price) = data.price
            && (!price.is_finite() || price <= 0.0)
        {
            return Err(RepoError::Validation(format!(
                "price must be positive, got {}",
                price
            )));
        }
        if let Some(stock) = data.stock
            && stock < 0
        {
            return Err(RepoError::Validation(format!(
                "stock cannot be negative, got {}",
                stock
            )));
        }

        let key = strip_table_prefix(PRODUCT_TABLE, id).to_string();
        let mut patch = serde_json::to_value(&data)
            .map_err(|e| RepoError::Database(format!("serialize update: {e}")))?;
        patch["updated_at"] = serde_json::Value::String(now_rfc3339());

        let updated: Option<Product> = self
            .base
            .db()
            .update((PRODUCT_TABLE, key))
            .merge(patch)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Product {id}")))
    }

    /// Delete a product; returns whether a record existed
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = strip_table_prefix(PRODUCT_TABLE, id);
        let deleted: Option<Product> = self.base.db().delete((PRODUCT_TABLE, key)).await?;
        Ok(deleted.is_some())
    }

    /// Number of products in the catalog
    pub async fn count(&self) -> RepoResult<i64> {
        self.base.count(PRODUCT_TABLE).await
    }
}
