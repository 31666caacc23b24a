use super::*;

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use shared::order::{Address, CheckoutItem, DIRECT_SALE, PaymentDetails};

use crate::db::models::{CommissionRecord, Product};
use crate::money::money_eq;
use crate::payment::{PaymentReceipt, SimulatedGateway};

// =============================================================================
// Test doubles
// =============================================================================

/// In-memory store with injectable commit failure
#[derive(Default)]
struct MockStore {
    products: Mutex<HashMap<String, Product>>,
    orders: Mutex<Vec<OrderRecord>>,
    commissions: Mutex<Vec<CommissionRecord>>,
    fail_commit: AtomicBool,
    next_id: AtomicUsize,
}

impl MockStore {
    fn with_product(key: &str, price: f64, stock: i64) -> Self {
        let store = Self::default();
        store.products.lock().unwrap().insert(
            key.to_string(),
            Product {
                id: None,
                name: format!("Product {key}"),
                description: String::new(),
                image_url: String::new(),
                price,
                category: "Electronics".to_string(),
                stock,
                sales_count: 0,
                weight: None,
                dimensions: None,
                created_at: None,
                updated_at: None,
            },
        );
        store
    }

    fn order_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    fn commission_count(&self) -> usize {
        self.commissions.lock().unwrap().len()
    }

    fn stock_of(&self, key: &str) -> i64 {
        self.products.lock().unwrap()[key].stock
    }

    fn sales_of(&self, key: &str) -> i64 {
        self.products.lock().unwrap()[key].sales_count
    }
}

fn bare_key(id: &str) -> &str {
    id.split_once(':').map(|(_, k)| k).unwrap_or(id)
}

#[async_trait]
impl SettlementStore for MockStore {
    async fn load_product(&self, product_id: &str) -> SettlementResult<Product> {
        self.products
            .lock()
            .unwrap()
            .get(bare_key(product_id))
            .cloned()
            .ok_or_else(|| SettlementError::ProductNotFound(product_id.to_string()))
    }

    async fn commit(&self, write_set: CheckoutWriteSet) -> SettlementResult<String> {
        if self.fail_commit.load(Ordering::SeqCst) {
            return Err(SettlementError::OrderCreationFailed(
                "simulated store rejection".to_string(),
            ));
        }

        // All-or-nothing under one lock, like a store-side transaction
        let mut products = self.products.lock().unwrap();
        let key = bare_key(&write_set.stock.product_id).to_string();
        let product = products
            .get_mut(&key)
            .ok_or_else(|| SettlementError::OrderCreationFailed("product vanished".to_string()))?;
        if product.stock + write_set.stock.delta_stock < 0 {
            return Err(SettlementError::OutOfStock {
                product: product.name.clone(),
                requested: -write_set.stock.delta_stock as i32,
                available: product.stock,
            });
        }
        product.stock += write_set.stock.delta_stock;
        product.sales_count += write_set.stock.delta_sales;

        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let order_id = format!("orders:mock{n}");
        self.orders.lock().unwrap().push(write_set.order);
        self.commissions.lock().unwrap().push(CommissionRecord {
            id: None,
            order_id: order_id.parse().unwrap(),
            reseller_id: write_set.commission.reseller_id,
            amount: write_set.commission.amount,
            status: write_set.commission.status,
            created_at: None,
        });
        Ok(order_id)
    }
}

/// Gateway double that can decline and records charges
#[derive(Default)]
struct MockGateway {
    decline: bool,
    charges: Mutex<Vec<f64>>,
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn charge(
        &self,
        amount: f64,
        _details: &PaymentDetails,
    ) -> SettlementResult<PaymentReceipt> {
        if self.decline {
            return Err(SettlementError::PaymentFailed(
                "card declined".to_string(),
            ));
        }
        self.charges.lock().unwrap().push(amount);
        Ok(PaymentReceipt {
            reference: "sim_test".to_string(),
            amount,
        })
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn customer() -> Customer {
    Customer {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        address: Address {
            line1: "123 Main St".to_string(),
            city: "San Francisco".to_string(),
            zip: "94103".to_string(),
        },
    }
}

fn checkout(product_key: &str, quantity: i32) -> CheckoutRequest {
    CheckoutRequest {
        customer: customer(),
        item: CheckoutItem {
            product_id: format!("products:{product_key}"),
            quantity,
        },
        referrer: None,
        payment: PaymentDetails {
            card_number: "4242424242424242".to_string(),
            expiry: "12/30".to_string(),
            cvc: "123".to_string(),
        },
    }
}

fn service(store: Arc<MockStore>, gateway: Arc<MockGateway>) -> SettlementService {
    SettlementService::new(
        store,
        gateway,
        PricingConfig::default(),
        CommissionConfig::default(),
    )
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_settles_referred_checkout() {
    let store = Arc::new(MockStore::with_product("p1", 199.99, 150));
    let gateway = Arc::new(MockGateway::default());
    let svc = service(store.clone(), gateway.clone());

    let settled = svc
        .settle(&checkout("p1", 1).with_referrer("aff1"))
        .await
        .unwrap();

    assert_eq!(settled.subtotal, 199.99);
    assert_eq!(settled.shipping, 5.00);
    assert_eq!(settled.handling, 2.50);
    assert_eq!(settled.taxes, 16.00);
    assert_eq!(settled.total, 223.49);
    assert_eq!(settled.commission.reseller_id, "aff1");
    // 199.99 * 0.1 = 19.999, persisted rounded
    assert!(money_eq(settled.commission.amount, 20.00));

    // Gateway charged the rounded total
    assert_eq!(*gateway.charges.lock().unwrap(), vec![223.49]);

    // All three effects applied together
    assert_eq!(store.order_count(), 1);
    assert_eq!(store.commission_count(), 1);
    assert_eq!(store.stock_of("p1"), 149);
    assert_eq!(store.sales_of("p1"), 1);

    let order = &store.orders.lock().unwrap()[0];
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 1);
    assert!(money_eq(
        order.total,
        order.subtotal + order.shipping + order.handling + order.taxes
    ));
}

#[tokio::test]
async fn test_direct_sale_earns_nothing() {
    let store = Arc::new(MockStore::with_product("p1", 199.99, 10));
    let svc = service(store.clone(), Arc::new(MockGateway::default()));

    let settled = svc.settle(&checkout("p1", 1)).await.unwrap();

    assert_eq!(settled.commission.reseller_id, DIRECT_SALE);
    assert_eq!(settled.commission.amount, 0.0);

    let commissions = store.commissions.lock().unwrap();
    assert_eq!(commissions.len(), 1);
    assert_eq!(commissions[0].reseller_id, DIRECT_SALE);
    assert_eq!(commissions[0].amount, 0.0);
}

#[tokio::test]
async fn test_invalid_customer_rejected_before_any_effect() {
    let store = Arc::new(MockStore::with_product("p1", 10.0, 5));
    let gateway = Arc::new(MockGateway::default());
    let svc = service(store.clone(), gateway.clone());

    let mut request = checkout("p1", 1);
    request.customer.name = "   ".to_string();

    let err = svc.settle(&request).await.unwrap_err();
    assert!(matches!(err, SettlementError::Validation(_)));
    assert!(gateway.charges.lock().unwrap().is_empty());
    assert_eq!(store.order_count(), 0);
    assert_eq!(store.stock_of("p1"), 5);
}

#[tokio::test]
async fn test_bad_email_rejected() {
    let store = Arc::new(MockStore::with_product("p1", 10.0, 5));
    let svc = service(store.clone(), Arc::new(MockGateway::default()));

    let mut request = checkout("p1", 1);
    request.customer.email = "not-an-email".to_string();

    let err = svc.settle(&request).await.unwrap_err();
    assert!(matches!(err, SettlementError::Validation(_)));
}

#[tokio::test]
async fn test_unknown_product() {
    let store = Arc::new(MockStore::default());
    let svc = service(store, Arc::new(MockGateway::default()));

    let err = svc.settle(&checkout("missing", 1)).await.unwrap_err();
    assert!(matches!(err, SettlementError::ProductNotFound(_)));
}

#[tokio::test]
async fn test_out_of_stock_rejected_before_charge() {
    let store = Arc::new(MockStore::with_product("p1", 49.99, 0));
    let gateway = Arc::new(MockGateway::default());
    let svc = service(store.clone(), gateway.clone());

    let err = svc.settle(&checkout("p1", 1)).await.unwrap_err();
    assert!(matches!(err, SettlementError::OutOfStock { .. }));

    // No charge attempted, no write attempted
    assert!(gateway.charges.lock().unwrap().is_empty());
    assert_eq!(store.order_count(), 0);
    assert_eq!(store.commission_count(), 0);
    assert_eq!(store.stock_of("p1"), 0);
}

#[tokio::test]
async fn test_payment_decline_leaves_no_trace() {
    let store = Arc::new(MockStore::with_product("p1", 24.99, 300));
    let gateway = Arc::new(MockGateway {
        decline: true,
        ..MockGateway::default()
    });
    let svc = service(store.clone(), gateway);

    let err = svc.settle(&checkout("p1", 1)).await.unwrap_err();
    assert!(matches!(err, SettlementError::PaymentFailed(_)));
    assert_eq!(store.order_count(), 0);
    assert_eq!(store.commission_count(), 0);
    assert_eq!(store.stock_of("p1"), 300);
}

#[tokio::test]
async fn test_store_rejection_is_atomic() {
    let store = Arc::new(MockStore::with_product("p1", 79.99, 200));
    let gateway = Arc::new(MockGateway::default());
    let svc = service(store.clone(), gateway.clone());

    store.fail_commit.store(true, Ordering::SeqCst);
    let err = svc.settle(&checkout("p1", 1)).await.unwrap_err();
    assert!(matches!(err, SettlementError::OrderCreationFailed(_)));

    // The charge went through (reconciliation case) but no document effects
    assert_eq!(gateway.charges.lock().unwrap().len(), 1);
    assert_eq!(store.order_count(), 0);
    assert_eq!(store.commission_count(), 0);
    assert_eq!(store.stock_of("p1"), 200);
    assert_eq!(store.sales_of("p1"), 0);
}

#[tokio::test]
async fn test_resubmission_creates_second_order() {
    // No dedup key: same form submitted twice is two orders
    let store = Arc::new(MockStore::with_product("p1", 349.99, 75));
    let svc = service(store.clone(), Arc::new(MockGateway::default()));

    let request = checkout("p1", 1);
    let first = svc.settle(&request).await.unwrap();
    let second = svc.settle(&request).await.unwrap();

    assert_ne!(first.order_id, second.order_id);
    assert_eq!(store.order_count(), 2);
    assert_eq!(store.stock_of("p1"), 73);
}

#[tokio::test]
async fn test_simulated_gateway_end_to_end() {
    let store = Arc::new(MockStore::with_product("p1", 199.99, 150));
    let svc = SettlementService::new(
        store.clone(),
        Arc::new(SimulatedGateway),
        PricingConfig::default(),
        CommissionConfig::default(),
    );

    let settled = svc.settle(&checkout("p1", 1)).await.unwrap();
    assert!(settled.payment_reference.starts_with("sim_"));
    assert_eq!(store.order_count(), 1);
}

#[test]
fn test_validate_customer_checks_every_field() {
    let good = customer();
    assert!(validate_customer(&good).is_ok());

    for mutate in [
        (|c: &mut Customer| c.name.clear()) as fn(&mut Customer),
        |c| c.email.clear(),
        |c| c.address.line1.clear(),
        |c| c.address.city.clear(),
        |c| c.address.zip = " ".to_string(),
    ] {
        let mut c = customer();
        mutate(&mut c);
        assert!(matches!(
            validate_customer(&c),
            Err(SettlementError::Validation(_))
        ));
    }
}
