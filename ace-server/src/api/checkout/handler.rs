//! Checkout API Handlers

use axum::{Json, extract::State};
use shared::order::CheckoutRequest;

use crate::core::ServerState;
use crate::settlement::SettledOrder;
use crate::utils::AppResult;

/// POST /api/checkout - 提交结算
///
/// 一次提交对应一个订单；重复提交会创建新的订单。
pub async fn checkout(
    State(state): State<ServerState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<SettledOrder>> {
    tracing::info!(
        product_id = %payload.item.product_id,
        quantity = payload.item.quantity,
        referrer = payload.referrer.as_deref().unwrap_or("-"),
        "Checkout request received"
    );

    let settled = state.settlement.settle(&payload).await?;
    Ok(Json(settled))
}
