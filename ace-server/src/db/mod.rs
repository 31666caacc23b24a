//! Database Module
//!
//! Embedded SurrealDB storage: connection handling, document models,
//! repositories, the transactional settlement store and catalog seeding.

pub mod models;
pub mod repository;
pub mod seed;
pub mod store;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

pub use store::SurrealStore;

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the embedded database at `db_path`
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {e}")))?;

        db.use_ns("ace")
            .use_db("main")
            .await
            .map_err(|e| AppError::Database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(path = %db_path, "Database connection established (SurrealDB embedded)");

        Ok(Self { db })
    }
}
