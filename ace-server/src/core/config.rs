use std::path::PathBuf;

use crate::commission::CommissionConfig;
use crate::pricing::PricingConfig;

/// 服务器配置 - 结算服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/ace | 工作目录 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | SHIPPING_CHARGE | 5.00 | 固定运费 |
/// | HANDLING_CHARGE | 2.50 | 固定手续费 |
/// | TAX_RATE | 0.08 | 税率 |
/// | COMMISSION_RATE | 0.10 | 分销佣金率 |
/// | SEED_CATALOG | true | 首次启动时是否初始化商品目录 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/ace HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,

    // === 结算参数 ===
    /// 固定运费
    pub shipping_charge: f64,
    /// 固定手续费
    pub handling_charge: f64,
    /// 税率 (对商品小计征收)
    pub tax_rate: f64,
    /// 分销佣金率 (对商品小计计提)
    pub commission_rate: f64,
    /// 首次启动时是否初始化商品目录
    pub seed_catalog: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/ace".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),

            shipping_charge: std::env::var("SHIPPING_CHARGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5.00),
            handling_charge: std::env::var("HANDLING_CHARGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2.50),
            tax_rate: std::env::var("TAX_RATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.08),
            commission_rate: std::env::var("COMMISSION_RATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.10),
            seed_catalog: std::env::var("SEED_CATALOG")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库目录 (work_dir/database)
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 定价配置视图
    pub fn pricing(&self) -> PricingConfig {
        PricingConfig {
            shipping_charge: self.shipping_charge,
            handling_charge: self.handling_charge,
            tax_rate: self.tax_rate,
        }
    }

    /// 佣金配置视图
    pub fn commission(&self) -> CommissionConfig {
        CommissionConfig {
            rate: self.commission_rate,
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
