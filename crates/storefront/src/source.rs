//! Collaborator interfaces the storefront services depend on.
//!
//! [`ApiClient`](crate::api::ApiClient) implements both traits over HTTP;
//! tests substitute in-memory fakes.

use async_trait::async_trait;
use rigstore_core::{Product, ProductId};
use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// One server-side page of discounted products.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountedPage {
    /// Products on this page.
    pub items: Vec<Product>,
    /// Discounted products across every page.
    pub total_count: usize,
}

/// Source of catalog data.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full product collection.
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Fetch one page of discounted products.
    async fn fetch_discounted_products(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<DiscountedPage, ApiError>;
}

/// Destination for add-to-cart requests.
#[async_trait]
pub trait CartSink: Send + Sync {
    /// Add `quantity` units of a product to the shopper's cart.
    async fn add_to_cart(&self, product_id: &ProductId, quantity: u32) -> Result<(), ApiError>;
}
