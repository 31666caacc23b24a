//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查接口
//! - [`products`] - 商品目录接口
//! - [`checkout`] - 结算接口
//! - [`orders`] - 订单查询接口
//! - [`commissions`] - 佣金查询接口

pub mod checkout;
pub mod commissions;
pub mod health;
pub mod orders;
pub mod products;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// 组装全部 API 路由
pub fn create_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(checkout::router())
        .merge(orders::router())
        .merge(commissions::router())
}
