//! Settled orders survive a database reopen
//! Run: cargo test -p ace-server --test persistence

use std::sync::Arc;

use ace_server::db::repository::{CommissionRepository, OrderRepository, ProductRepository};
use ace_server::db::{DbService, SurrealStore};
use ace_server::db::models::ProductCreate;
use ace_server::{CommissionConfig, PricingConfig, SettlementService, SimulatedGateway};
use shared::order::{Address, CheckoutRequest, Customer};

#[tokio::test]
async fn settled_order_survives_reopen() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("ace.db");
    let db_path_str = db_path.to_string_lossy().to_string();

    let (order_id, product_id) = {
        let db = DbService::new(&db_path_str).await.unwrap().db;

        let products = ProductRepository::new(db.clone());
        let product = products
            .create(ProductCreate {
                name: "AcousticPro Headphones".to_string(),
                description: String::new(),
                image_url: None,
                price: 199.99,
                category: "Electronics".to_string(),
                stock: 150,
                weight: None,
                dimensions: None,
            })
            .await
            .unwrap();
        let product_id = product.id.unwrap().to_string();

        let svc = SettlementService::new(
            Arc::new(SurrealStore::new(db.clone())),
            Arc::new(SimulatedGateway),
            PricingConfig::default(),
            CommissionConfig::default(),
        );

        let customer = Customer {
            name: "Jamie Reyes".to_string(),
            email: "jamie@example.com".to_string(),
            address: Address {
                line1: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                zip: "12345".to_string(),
            },
        };
        let settled = svc
            .settle(
                &CheckoutRequest::new(customer, product_id.clone(), 1)
                    .with_referrer("reseller-42"),
            )
            .await
            .unwrap();

        (settled.order_id, product_id)
        // db handle dropped here, releasing the storage lock
    };

    let db = DbService::new(&db_path_str).await.unwrap().db;

    let order = OrderRepository::new(db.clone())
        .find_by_id(&order_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(order.total, 223.49);

    let earned = CommissionRepository::new(db.clone())
        .find_by_reseller("reseller-42")
        .await
        .unwrap();
    assert_eq!(earned.len(), 1);
    assert_eq!(earned[0].amount, 20.00);

    let product = ProductRepository::new(db.clone())
        .find_by_id(&product_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(product.stock, 149);
    assert_eq!(product.sales_count, 1);
}
