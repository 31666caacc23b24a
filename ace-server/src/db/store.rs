//! SurrealDB settlement store
//!
//! Implements the [`SettlementStore`] commit contract with a single
//! transactional query: order create, commission create and relative
//! stock/sales adjustment either all apply or none do. A stock guard
//! inside the transaction catches the race where concurrent checkouts
//! drain the same product between the orchestrator's pre-check and the
//! commit.

use async_trait::async_trait;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use uuid::Uuid;

use crate::db::models::{CommissionRecord, Product};
use crate::db::repository::{
    COMMISSION_TABLE, ORDER_TABLE, PRODUCT_TABLE, ProductRepository, strip_table_prefix,
};
use crate::settlement::{
    CheckoutWriteSet, SettlementError, SettlementResult, SettlementStore,
};
use crate::utils::now_rfc3339;

const SETTLE_QUERY: &str = r#"
BEGIN TRANSACTION;
LET $product = type::thing($product_tb, $product_key);
LET $current = (SELECT stock FROM ONLY $product);
IF $current == NONE { THROW 'product missing' };
IF $current.stock < $quantity { THROW 'insufficient stock' };
CREATE type::thing($order_tb, $order_key) CONTENT $order;
CREATE type::thing($commission_tb, $commission_key) CONTENT $commission;
UPDATE $product SET stock -= $quantity, sales_count += $sales, updated_at = $now;
COMMIT TRANSACTION;
"#;

#[derive(Clone)]
pub struct SurrealStore {
    db: Surreal<Db>,
}

impl SurrealStore {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettlementStore for SurrealStore {
    async fn load_product(&self, product_id: &str) -> SettlementResult<Product> {
        let repo = ProductRepository::new(self.db.clone());
        repo.find_by_id(product_id)
            .await
            .map_err(|e| SettlementError::Storage(e.to_string()))?
            .ok_or_else(|| SettlementError::ProductNotFound(product_id.to_string()))
    }

    async fn commit(&self, write_set: CheckoutWriteSet) -> SettlementResult<String> {
        let product_key =
            strip_table_prefix(PRODUCT_TABLE, &write_set.stock.product_id).to_string();
        let order_key = Uuid::new_v4().simple().to_string();
        let commission_key = Uuid::new_v4().simple().to_string();
        let quantity = -write_set.stock.delta_stock;
        let product_name = write_set
            .order
            .items
            .first()
            .map(|i| i.product_name.clone())
            .unwrap_or_default();

        let commission = CommissionRecord {
            id: None,
            order_id: RecordId::from_table_key(ORDER_TABLE, order_key.as_str()),
            reseller_id: write_set.commission.reseller_id,
            amount: write_set.commission.amount,
            status: write_set.commission.status,
            created_at: Some(now_rfc3339()),
        };

        let response = self
            .db
            .query(SETTLE_QUERY)
            .bind(("product_tb", PRODUCT_TABLE))
            .bind(("product_key", product_key.clone()))
            .bind(("order_tb", ORDER_TABLE))
            .bind(("order_key", order_key.clone()))
            .bind(("commission_tb", COMMISSION_TABLE))
            .bind(("commission_key", commission_key))
            .bind(("quantity", quantity))
            .bind(("sales", write_set.stock.delta_sales))
            .bind(("order", write_set.order))
            .bind(("commission", commission))
            .bind(("now", now_rfc3339()))
            .await
            .map_err(|e| SettlementError::Storage(e.to_string()))?;

        match response.check() {
            Ok(_) => Ok(format!("{ORDER_TABLE}:{order_key}")),
            Err(e) => {
                let msg = e.to_string();
                if msg.contains("insufficient stock") {
                    // Lost the race against a concurrent checkout; report
                    // the stock as it stands after the aborted transaction.
                    let available = self
                        .load_product(&product_key)
                        .await
                        .map(|p| p.stock)
                        .unwrap_or(0);
                    Err(SettlementError::OutOfStock {
                        product: product_name,
                        requested: quantity as i32,
                        available,
                    })
                } else if msg.contains("product missing") {
                    Err(SettlementError::ProductNotFound(product_key))
                } else {
                    Err(SettlementError::OrderCreationFailed(msg))
                }
            }
        }
    }
}
