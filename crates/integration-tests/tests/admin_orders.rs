//! Back-office flows against the in-memory backend.

#![allow(clippy::unwrap_used)]

use rigstore_admin::types::{Order, ProductUpdate, StatusUpdate, User};
use rigstore_admin::{Dashboard, OrderStore, ProductManager, ProductModal, Tab};
use rigstore_core::{OrderStatus, PaymentStatus, ProductId, UserRole};
use rigstore_integration_tests::{MemoryBackend, product};
use rust_decimal::Decimal;
use serde_json::json;

fn orders() -> Vec<Order> {
    serde_json::from_value(json!([
        {
            "_id": "o1",
            "user": {"_id": "u1", "name": "Sam"},
            "items": [{"product": "cpu", "quantity": 1, "price": "449"}],
            "totalAmount": "449",
            "orderStatus": "pending",
            "paymentStatus": "pending"
        },
        {
            "_id": "o2",
            "user": "u2",
            "items": [],
            "totalAmount": "0",
            "orderStatus": "processing",
            "paymentStatus": "paid"
        }
    ]))
    .unwrap()
}

fn users() -> Vec<User> {
    serde_json::from_value(json!([
        {"_id": "u1", "name": "Sam", "email": "sam@example.com", "role": "admin"},
        {"_id": "u2", "email": "kim@example.com"}
    ]))
    .unwrap()
}

#[tokio::test]
async fn test_status_update_patches_local_list() {
    let backend = MemoryBackend::default().with_orders(orders());
    let mut store = OrderStore::new();
    store.fetch_all_orders(&backend).await.unwrap();

    let update = StatusUpdate::new(OrderStatus::Shipped).with_payment(PaymentStatus::Paid);
    store.update_order_status(&backend, &"o1".into(), update).await.unwrap();

    let local = &store.orders()[0];
    assert_eq!(local.order_status, OrderStatus::Shipped);
    assert_eq!(local.payment_status, PaymentStatus::Paid);
    assert_eq!(store.current().unwrap().id.as_str(), "o1");
    // Server copy agrees
    assert_eq!(backend.orders()[0].order_status, OrderStatus::Shipped);
}

#[tokio::test]
async fn test_status_update_without_payment_keeps_it() {
    let backend = MemoryBackend::default().with_orders(orders());
    let mut store = OrderStore::new();
    store.fetch_all_orders(&backend).await.unwrap();

    store
        .update_order_status(&backend, &"o2".into(), StatusUpdate::new(OrderStatus::Delivered))
        .await
        .unwrap();
    assert_eq!(store.orders()[1].payment_status, PaymentStatus::Paid);
}

#[tokio::test]
async fn test_missing_order_sets_error_message() {
    let backend = MemoryBackend::default().with_orders(orders());
    let mut store = OrderStore::new();

    assert!(store.fetch_order_details(&backend, &"nope".into()).await.is_err());
    assert_eq!(store.error(), Some("Failed to fetch order details. Please try again."));
    assert!(store.current().is_none());
}

#[tokio::test]
async fn test_product_modals_close_on_success() {
    let backend = MemoryBackend::with_products(vec![product("gpu", "Graphics Card", "AMD", 899)]);
    let mut manager = ProductManager::new();
    manager.load(&backend).await.unwrap();

    let id = ProductId::new("gpu");
    manager.open(ProductModal::Discount(id.clone()));
    manager.toggle_discount(&backend, &id, Some(Decimal::from(799))).await.unwrap();
    assert!(manager.modal().is_none());
    assert_eq!(backend.products()[0].effective_price(), Some(Decimal::from(799)));

    manager.open(ProductModal::Edit(id.clone()));
    let update = ProductUpdate {
        title: Some("Radeon RX 7900 XT".to_string()),
        ..ProductUpdate::default()
    };
    manager.update_product(&backend, &id, &update).await.unwrap();
    assert_eq!(manager.get(&id).unwrap().title.as_deref(), Some("Radeon RX 7900 XT"));

    manager.open(ProductModal::Delete(id.clone()));
    manager.delete_product(&backend, &id).await.unwrap();
    assert!(manager.products().is_empty());
    assert!(backend.products().is_empty());
}

#[tokio::test]
async fn test_failed_delete_keeps_modal_open() {
    let backend = MemoryBackend::default();
    let mut manager = ProductManager::new();
    let id = ProductId::new("ghost");
    manager.open(ProductModal::Delete(id.clone()));

    assert!(manager.delete_product(&backend, &id).await.is_err());
    assert!(manager.is_open(&ProductModal::Delete(id)));
    assert!(manager.error().unwrap().contains("Product not found"));
}

#[tokio::test]
async fn test_dashboard_loads_each_tab() {
    let backend = MemoryBackend::with_products(vec![product("cpu", "Processor", "AMD", 449)])
        .with_orders(orders())
        .with_users(users());
    let mut dashboard = Dashboard::new();
    assert_eq!(dashboard.active_tab(), Tab::Create);

    dashboard.activate(&backend, Tab::Users).await.unwrap();
    assert_eq!(dashboard.users.users().len(), 2);
    assert_eq!(dashboard.users.users()[0].role, UserRole::Admin);
    assert_eq!(dashboard.users.users()[1].role, UserRole::Customer);

    dashboard.activate(&backend, Tab::Orders).await.unwrap();
    assert_eq!(dashboard.orders.orders().len(), 2);

    dashboard.activate(&backend, Tab::Products).await.unwrap();
    assert_eq!(dashboard.products.products().len(), 1);
    assert_eq!(dashboard.active_tab(), Tab::Products);
}
