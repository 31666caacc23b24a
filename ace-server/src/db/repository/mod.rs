//! Repository Module
//!
//! Read/write access to the SurrealDB collections. Settlement never goes
//! through these CRUD paths for its three-document write; that lives in
//! [`crate::db::store`] behind the atomic commit contract.

pub mod commission;
pub mod order;
pub mod product;

// Re-exports
pub use commission::CommissionRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Collection names (mirror the storefront's document layout)
pub const PRODUCT_TABLE: &str = "products";
pub const ORDER_TABLE: &str = "orders";
pub const COMMISSION_TABLE: &str = "commissions";

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

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Accept both "table:key" and bare "key" id formats from callers
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    match id.split_once(':') {
        Some((t, key)) if t == table => key,
        _ => id,
    }
}

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

    /// Count rows in a collection
    pub async fn count(&self, table: &str) -> RepoResult<i64> {
        #[derive(serde::Deserialize)]
        struct Count {
            count: i64,
        }

        let count: Option<Count> = self
            .db
            .query(format!("SELECT count() FROM {table} GROUP ALL"))
            .await?
            .take(0)?;
        Ok(count.map(|c| c.count).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_table_prefix() {
        assert_eq!(strip_table_prefix("products", "products:abc"), "abc");
        assert_eq!(strip_table_prefix("products", "abc"), "abc");
        // Foreign prefix is left alone rather than mangled
        assert_eq!(strip_table_prefix("products", "orders:abc"), "orders:abc");
    }
}
