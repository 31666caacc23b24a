//! Commission API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::CommissionRecord;
use crate::db::repository::CommissionRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/commissions - 获取所有佣金记录
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<CommissionRecord>>> {
    let repo = CommissionRepository::new(state.db.clone());
    let commissions = repo.find_all().await?;
    Ok(Json(commissions))
}

/// GET /api/commissions/:id - 获取单条佣金记录
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CommissionRecord>> {
    let repo = CommissionRepository::new(state.db.clone());
    let commission = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Commission {}", id)))?;
    Ok(Json(commission))
}

/// GET /api/commissions/by-reseller/:reseller_id - 某分销商的佣金明细
pub async fn list_by_reseller(
    State(state): State<ServerState>,
    Path(reseller_id): Path<String>,
) -> AppResult<Json<Vec<CommissionRecord>>> {
    let repo = CommissionRepository::new(state.db.clone());
    let commissions = repo.find_by_reseller(&reseller_id).await?;
    Ok(Json(commissions))
}

/// 佣金总额响应
#[derive(Serialize)]
pub struct EarningsResponse {
    pub reseller_id: String,
    /// 全部状态的佣金合计
    pub total: f64,
    /// 佣金笔数
    pub entries: usize,
}

/// GET /api/commissions/by-reseller/:reseller_id/earnings - 佣金总额
pub async fn earnings(
    State(state): State<ServerState>,
    Path(reseller_id): Path<String>,
) -> AppResult<Json<EarningsResponse>> {
    let repo = CommissionRepository::new(state.db.clone());
    let entries = repo.find_by_reseller(&reseller_id).await?.len();
    let total = repo.total_earnings(&reseller_id).await?;
    Ok(Json(EarningsResponse {
        reseller_id,
        total,
        entries,
    }))
}
