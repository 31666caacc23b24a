//! AffiliateAce Settlement Server - 分销电商平台结算服务
//!
//! # 架构概述
//!
//! 本模块是结算服务的主入口，提供以下核心功能：
//!
//! - **定价** (`pricing`): 单商品购物车的金额拆分计算
//! - **佣金归因** (`commission`): 分销商佣金计算
//! - **结算编排** (`settlement`): 订单 + 佣金 + 库存的原子写入
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! ace-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── money/         # Decimal 精度货币运算
//! ├── pricing/       # 定价计算器
//! ├── commission/    # 佣金归因
//! ├── payment/       # 支付网关抽象 (模拟实现)
//! ├── settlement/    # 结算编排器
//! ├── db/            # 数据库层 (模型、仓储、原子写)
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志等工具
//! ```

pub mod api;
pub mod commission;
pub mod core;
pub mod db;
pub mod money;
pub mod payment;
pub mod pricing;
pub mod settlement;
pub mod utils;

// Re-export 公共类型
pub use commission::{CommissionAttribution, CommissionConfig};
pub use core::{Config, Server, ServerState};
pub use payment::{PaymentGateway, SimulatedGateway};
pub use pricing::{PricingBreakdown, PricingConfig};
pub use settlement::{
    CheckoutWriteSet, SettledOrder, SettlementError, SettlementResult, SettlementService,
    SettlementStore,
};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
