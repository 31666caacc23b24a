//! Commission Repository
//!
//! Read-only access to commission records; creation happens inside the
//! settlement transaction, payout transitions in external workflows.

use super::{BaseRepository, COMMISSION_TABLE, RepoResult, strip_table_prefix};
use crate::db::models::CommissionRecord;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct CommissionRepository {
    base: BaseRepository,
}

impl CommissionRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All commission records, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<CommissionRecord>> {
        let commissions: Vec<CommissionRecord> = self
            .base
            .db()
            .query("SELECT * FROM commissions ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(commissions)
    }

    /// Find commission by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<CommissionRecord>> {
        let key = strip_table_prefix(COMMISSION_TABLE, id);
        let commission: Option<CommissionRecord> =
            self.base.db().select((COMMISSION_TABLE, key)).await?;
        Ok(commission)
    }

    /// Commissions attributed to one reseller (earnings view)
    pub async fn find_by_reseller(&self, reseller_id: &str) -> RepoResult<Vec<CommissionRecord>> {
        let commissions: Vec<CommissionRecord> = self
            .base
            .db()
            .query("SELECT * FROM commissions WHERE reseller_id = $rid ORDER BY created_at DESC")
            .bind(("rid", reseller_id.to_string()))
            .await?
            .take(0)?;
        Ok(commissions)
    }

    /// Sum of a reseller's commission amounts across all statuses
    pub async fn total_earnings(&self, reseller_id: &str) -> RepoResult<f64> {
        #[derive(serde::Deserialize)]
        struct Total {
            total: f64,
        }

        let total: Option<Total> = self
            .base
            .db()
            .query(
                "SELECT math::sum(amount) AS total FROM commissions WHERE reseller_id = $rid GROUP ALL",
            )
            .bind(("rid", reseller_id.to_string()))
            .await?
            .take(0)?;
        Ok(total.map(|t| t.total).unwrap_or(0.0))
    }

    /// Number of commission records
    pub async fn count(&self) -> RepoResult<i64> {
        self.base.count(COMMISSION_TABLE).await
    }
}
