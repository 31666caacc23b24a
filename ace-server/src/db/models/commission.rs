//! Commission Record Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::order::CommissionStatus;
use surrealdb::RecordId;

/// Standalone commission document, derived 1:1 from an order at creation
///
/// Back-references the order; status transitions (pending -> paid/cancelled)
/// belong to external payout workflows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionRecord {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub order_id: RecordId,
    pub reseller_id: String,
    pub amount: f64,
    pub status: CommissionStatus,
    pub created_at: Option<String>,
}
