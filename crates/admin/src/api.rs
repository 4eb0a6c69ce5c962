//! Back-office API interface and its HTTP implementation.
//!
//! # Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | products | `GET /products` (via [`CatalogSource`]) |
//! | update product | `PUT /products/{id}` |
//! | apply / remove discount | `PATCH /products/{id}/discount` |
//! | delete product | `DELETE /products/{id}` |
//! | all orders | `GET /orders/admin/all` |
//! | order details | `GET /orders/admin/{id}` |
//! | order status | `PATCH /orders/admin/{id}/status` |
//! | users | `GET /admin/users` |

use async_trait::async_trait;
use reqwest::Method;
use rigstore_core::{OrderId, Product, ProductId};
use rigstore_storefront::api::{ApiClient, ApiError};
use rigstore_storefront::source::CatalogSource;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::types::{DiscountUpdate, Order, ProductUpdate, StatusUpdate, User};

/// Back-office operations.
#[async_trait]
pub trait AdminApi: CatalogSource {
    /// Replace a product's editable fields; returns the stored product.
    async fn update_product(&self, id: &ProductId, update: &ProductUpdate) -> Result<Product, ApiError>;

    /// Apply a discount price, or remove the discount when `None`.
    async fn set_discount(&self, id: &ProductId, discount_price: Option<Decimal>) -> Result<Product, ApiError>;

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError>;

    async fn fetch_all_orders(&self) -> Result<Vec<Order>, ApiError>;

    async fn fetch_order(&self, id: &OrderId) -> Result<Order, ApiError>;

    /// Update an order's status; returns the stored order.
    async fn update_order_status(&self, id: &OrderId, update: &StatusUpdate) -> Result<Order, ApiError>;

    async fn fetch_all_users(&self) -> Result<Vec<User>, ApiError>;
}

#[async_trait]
impl AdminApi for ApiClient {
    #[instrument(skip(self, id, update), fields(product_id = %id))]
    async fn update_product(&self, id: &ProductId, update: &ProductUpdate) -> Result<Product, ApiError> {
        let product: Product = self
            .send_json(Method::PUT, &format!("products/{id}"), Some(update))
            .await?;
        self.invalidate_products().await;
        debug!("Product updated");
        Ok(product)
    }

    #[instrument(skip(self, id), fields(product_id = %id))]
    async fn set_discount(&self, id: &ProductId, discount_price: Option<Decimal>) -> Result<Product, ApiError> {
        let body = DiscountUpdate { discount_price };
        let product: Product = self
            .send_json(Method::PATCH, &format!("products/{id}/discount"), Some(&body))
            .await?;
        self.invalidate_products().await;
        debug!(on_discount = product.on_discount, "Product discount updated");
        Ok(product)
    }

    #[instrument(skip(self, id), fields(product_id = %id))]
    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .send_json(Method::DELETE, &format!("products/{id}"), None::<&()>)
            .await?;
        self.invalidate_products().await;
        debug!("Product deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn fetch_all_orders(&self) -> Result<Vec<Order>, ApiError> {
        let orders: Vec<Order> = self.get_json("orders/admin/all", &[]).await?;
        debug!(count = orders.len(), "Fetched orders");
        Ok(orders)
    }

    #[instrument(skip(self, id), fields(order_id = %id))]
    async fn fetch_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        self.get_json(&format!("orders/admin/{id}"), &[]).await
    }

    #[instrument(skip(self, id), fields(order_id = %id, status = %update.order_status))]
    async fn update_order_status(&self, id: &OrderId, update: &StatusUpdate) -> Result<Order, ApiError> {
        self.send_json(Method::PATCH, &format!("orders/admin/{id}/status"), Some(update))
            .await
    }

    #[instrument(skip(self))]
    async fn fetch_all_users(&self) -> Result<Vec<User>, ApiError> {
        let users: Vec<User> = self.get_json("admin/users", &[]).await?;
        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }
}
