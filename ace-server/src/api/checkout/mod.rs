//! Checkout API 模块
//!
//! 单商品购物车的结算入口。成功响应返回订单号、支付流水号和
//! 金额拆分；失败时订单、佣金、库存三者都保持不变。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/checkout", post(handler::checkout))
}
