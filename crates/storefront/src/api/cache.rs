//! Cache types for API responses.

use std::sync::Arc;

use rigstore_core::Product;

use crate::source::DiscountedPage;

/// Cache key for product listings.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Products,
    Discounted { page: u32, limit: u32 },
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Arc<Vec<Product>>),
    Discounted(Arc<DiscountedPage>),
}
