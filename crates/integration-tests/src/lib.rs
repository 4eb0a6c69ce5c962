//! Integration tests for Rigstore.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p rigstore-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_pipeline` - Filter, sort and paginate over realistic catalogs
//! - `build_commit` - PC-build validity, totals and cart commit
//! - `admin_orders` - Back-office order and product flows
//!
//! Every test runs against [`MemoryBackend`], an in-memory stand-in for the
//! store REST API, so no server is needed.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use rigstore_admin::AdminApi;
use rigstore_admin::types::{Order, ProductUpdate, StatusUpdate, User};
use rigstore_core::{OrderId, Product, ProductId};
use rigstore_storefront::api::ApiError;
use rigstore_storefront::source::{CartSink, CatalogSource, DiscountedPage};
use rust_decimal::Decimal;

/// In-memory store API.
///
/// Serves the product and order collections it was built with and records
/// every cart line it receives. Add-to-cart fails with a 400 for products
/// registered with [`fail_cart_for`](Self::fail_cart_for).
#[derive(Debug, Default)]
pub struct MemoryBackend {
    products: Mutex<Vec<Product>>,
    orders: Mutex<Vec<Order>>,
    users: Vec<User>,
    cart: Mutex<Vec<(ProductId, u32)>>,
    cart_calls: Mutex<usize>,
    failing: HashSet<ProductId>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn not_found(what: &str) -> ApiError {
    ApiError::Api {
        status: 404,
        message: format!("{what} not found"),
    }
}

impl MemoryBackend {
    /// Backend serving `products`.
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            ..Self::default()
        }
    }

    /// Add orders to serve.
    #[must_use]
    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = Mutex::new(orders);
        self
    }

    /// Add users to serve.
    #[must_use]
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    /// Reject add-to-cart requests for `id`.
    #[must_use]
    pub fn fail_cart_for(mut self, id: impl Into<ProductId>) -> Self {
        self.failing.insert(id.into());
        self
    }

    /// Cart lines accepted so far, in arrival order.
    #[must_use]
    pub fn cart(&self) -> Vec<(ProductId, u32)> {
        lock(&self.cart).clone()
    }

    /// Add-to-cart requests received, accepted or not.
    #[must_use]
    pub fn cart_calls(&self) -> usize {
        *lock(&self.cart_calls)
    }

    /// Current product collection.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        lock(&self.products).clone()
    }

    /// Current order collection.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        lock(&self.orders).clone()
    }

    fn find_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        lock(&self.products)
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| not_found("Product"))
    }
}

#[async_trait]
impl CatalogSource for MemoryBackend {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        Ok(self.products())
    }

    async fn fetch_discounted_products(&self, page: u32, page_size: u32) -> Result<DiscountedPage, ApiError> {
        let discounted: Vec<Product> = lock(&self.products)
            .iter()
            .filter(|p| p.on_discount)
            .cloned()
            .collect();
        let total_count = discounted.len();
        let skip = (page.max(1) as usize - 1) * page_size as usize;
        Ok(DiscountedPage {
            items: discounted.into_iter().skip(skip).take(page_size as usize).collect(),
            total_count,
        })
    }
}

#[async_trait]
impl CartSink for MemoryBackend {
    async fn add_to_cart(&self, product_id: &ProductId, quantity: u32) -> Result<(), ApiError> {
        *lock(&self.cart_calls) += 1;
        if self.failing.contains(product_id) {
            return Err(ApiError::Api {
                status: 400,
                message: format!("Cannot add {product_id} to cart"),
            });
        }
        self.find_product(product_id)?;
        lock(&self.cart).push((product_id.clone(), quantity));
        Ok(())
    }
}

#[async_trait]
impl AdminApi for MemoryBackend {
    async fn update_product(&self, id: &ProductId, update: &ProductUpdate) -> Result<Product, ApiError> {
        let mut products = lock(&self.products);
        let product = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| not_found("Product"))?;
        if let Some(title) = &update.title {
            product.title = Some(title.clone());
        }
        if let Some(price) = update.price {
            product.price = Some(price);
        }
        if let Some(stock) = update.stock {
            product.stock = stock;
        }
        Ok(product.clone())
    }

    async fn set_discount(&self, id: &ProductId, discount_price: Option<Decimal>) -> Result<Product, ApiError> {
        let mut products = lock(&self.products);
        let product = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| not_found("Product"))?;
        product.on_discount = discount_price.is_some();
        product.discount_price = discount_price;
        Ok(product.clone())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        let mut products = lock(&self.products);
        let before = products.len();
        products.retain(|p| &p.id != id);
        if products.len() == before {
            return Err(not_found("Product"));
        }
        Ok(())
    }

    async fn fetch_all_orders(&self) -> Result<Vec<Order>, ApiError> {
        Ok(self.orders())
    }

    async fn fetch_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        lock(&self.orders)
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(|| not_found("Order"))
    }

    async fn update_order_status(&self, id: &OrderId, update: &StatusUpdate) -> Result<Order, ApiError> {
        let mut orders = lock(&self.orders);
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| not_found("Order"))?;
        update.apply(order);
        Ok(order.clone())
    }

    async fn fetch_all_users(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.users.clone())
    }
}

/// A product with a category, brand and base price.
#[must_use]
pub fn product(id: &str, category: &str, brand: &str, price: i64) -> Product {
    let mut p = Product::new(id, Decimal::from(price));
    p.category = Some(category.to_string());
    p.brand = Some(brand.to_string());
    p.stock = 10;
    p
}

/// A product on discount.
#[must_use]
pub fn discounted(id: &str, category: &str, brand: &str, price: i64, discount_price: i64) -> Product {
    let mut p = product(id, category, brand, price);
    p.on_discount = true;
    p.discount_price = Some(Decimal::from(discount_price));
    p
}
