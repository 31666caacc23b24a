//! Order Repository
//!
//! Read-only access to settled orders. Order creation goes exclusively
//! through the settlement store's atomic commit.

use super::{BaseRepository, ORDER_TABLE, RepoResult, strip_table_prefix};
use crate::db::models::OrderRecord;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

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

    /// All orders, newest first (admin dashboard)
    pub async fn find_all(&self) -> RepoResult<Vec<OrderRecord>> {
        let orders: Vec<OrderRecord> = self
            .base
            .db()
            .query("SELECT * FROM orders ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<OrderRecord>> {
        let key = strip_table_prefix(ORDER_TABLE, id);
        let order: Option<OrderRecord> = self.base.db().select((ORDER_TABLE, key)).await?;
        Ok(order)
    }

    /// Number of settled orders
    pub async fn count(&self) -> RepoResult<i64> {
        self.base.count(ORDER_TABLE).await
    }
}
