//! Commission API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/commissions | GET | 全部佣金记录 |
//! | /api/commissions/:id | GET | 单条佣金记录 |
//! | /api/commissions/by-reseller/:reseller_id | GET | 某分销商的佣金明细 |
//! | /api/commissions/by-reseller/:reseller_id/earnings | GET | 某分销商的佣金总额 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/commissions", commission_routes())
}

fn commission_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/by-reseller/{reseller_id}", get(handler::list_by_reseller))
        .route(
            "/by-reseller/{reseller_id}/earnings",
            get(handler::earnings),
        )
}
