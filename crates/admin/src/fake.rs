//! In-memory [`AdminApi`] for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use rigstore_core::{OrderId, Product, ProductId};
use rigstore_storefront::api::ApiError;
use rigstore_storefront::source::{CatalogSource, DiscountedPage};
use rust_decimal::Decimal;

use crate::api::AdminApi;
use crate::types::{Order, ProductUpdate, StatusUpdate, User};

/// Serves fixed data; every call fails with a 400 when `reject` is set.
#[derive(Default)]
pub struct FakeApi {
    pub products: Mutex<Vec<Product>>,
    pub orders: Mutex<Vec<Order>>,
    pub users: Vec<User>,
    pub reject: Option<String>,
    pub calls: Mutex<Vec<&'static str>>,
}

impl FakeApi {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            ..Self::default()
        }
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: Mutex::new(orders),
            ..Self::default()
        }
    }

    fn record(&self, call: &'static str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        self.reject.as_ref().map_or(Ok(()), |message| {
            Err(ApiError::Api {
                status: 400,
                message: message.clone(),
            })
        })
    }

    fn not_found(what: &str) -> ApiError {
        ApiError::Api {
            status: 404,
            message: format!("{what} not found"),
        }
    }
}

#[async_trait]
impl CatalogSource for FakeApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        self.record("fetch_products")?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn fetch_discounted_products(&self, _page: u32, _page_size: u32) -> Result<DiscountedPage, ApiError> {
        self.record("fetch_discounted_products")?;
        Ok(DiscountedPage::default())
    }
}

#[async_trait]
impl AdminApi for FakeApi {
    async fn update_product(&self, id: &ProductId, update: &ProductUpdate) -> Result<Product, ApiError> {
        self.record("update_product")?;
        let mut products = self.products.lock().unwrap();
        let product = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| Self::not_found("product"))?;
        if let Some(price) = update.price {
            product.price = Some(price);
        }
        if let Some(title) = &update.title {
            product.title = Some(title.clone());
        }
        Ok(product.clone())
    }

    async fn set_discount(&self, id: &ProductId, discount_price: Option<Decimal>) -> Result<Product, ApiError> {
        self.record("set_discount")?;
        let mut products = self.products.lock().unwrap();
        let product = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| Self::not_found("product"))?;
        product.on_discount = discount_price.is_some();
        product.discount_price = discount_price;
        Ok(product.clone())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        self.record("delete_product")?;
        self.products.lock().unwrap().retain(|p| &p.id != id);
        Ok(())
    }

    async fn fetch_all_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.record("fetch_all_orders")?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn fetch_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        self.record("fetch_order")?;
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("order"))
    }

    async fn update_order_status(&self, id: &OrderId, update: &StatusUpdate) -> Result<Order, ApiError> {
        self.record("update_order_status")?;
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| Self::not_found("order"))?;
        update.apply(order);
        Ok(order.clone())
    }

    async fn fetch_all_users(&self) -> Result<Vec<User>, ApiError> {
        self.record("fetch_all_users")?;
        Ok(self.users.clone())
    }
}
