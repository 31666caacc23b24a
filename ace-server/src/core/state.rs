use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::{DbService, SurrealStore, seed};
use crate::payment::SimulatedGateway;
use crate::settlement::SettlementService;
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | settlement | Arc<SettlementService> | 结算编排服务 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 结算编排服务
    pub settlement: Arc<SettlementService>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: Surreal<Db>, settlement: Arc<SettlementService>) -> Self {
        Self {
            config,
            db,
            settlement,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/ace.db)
    /// 3. 商品目录初始化 (可选)
    /// 4. 结算服务 (存储 + 支付网关 + 定价/佣金配置)
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let pricing = config.pricing();
        pricing.validate()?;
        let commission = config.commission();
        commission.validate()?;

        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir).map_err(|e| {
            AppError::Internal(format!(
                "Failed to create database directory {}: {e}",
                db_dir.display()
            ))
        })?;

        let db_path = db_dir.join("ace.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;
        let db = db_service.db;

        if config.seed_catalog {
            let seeded = seed::seed_if_empty(&db).await?;
            if seeded > 0 {
                tracing::info!(count = seeded, "Starter catalog initialized");
            }
        }

        let store = Arc::new(SurrealStore::new(db.clone()));
        let gateway = Arc::new(SimulatedGateway);
        let settlement = Arc::new(SettlementService::new(store, gateway, pricing, commission));

        Ok(Self::new(config.clone(), db, settlement))
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取结算服务
    pub fn settlement(&self) -> Arc<SettlementService> {
        self.settlement.clone()
    }
}
