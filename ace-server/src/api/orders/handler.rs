//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::OrderRecord;
use crate::db::repository::OrderRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/orders - 获取所有订单 (管理后台)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderRecord>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_all().await?;
    Ok(Json(orders))
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderRecord>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order {}", id)))?;
    Ok(Json(order))
}
