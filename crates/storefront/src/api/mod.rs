//! REST client for the store API.
//!
//! Uses `reqwest` for HTTP and caches product listings with `moka`
//! (TTL and capacity from [`StorefrontConfig`]). Cart writes are never
//! cached.
//!
//! # Example
//!
//! ```rust,ignore
//! use rigstore_storefront::api::ApiClient;
//! use rigstore_storefront::config::StorefrontConfig;
//! use rigstore_storefront::source::CatalogSource;
//!
//! let client = ApiClient::new(&StorefrontConfig::from_env()?)?;
//! let products = client.fetch_products().await?;
//! ```

mod cache;
mod error;

pub use error::{ApiError, ErrorKind};

use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use rigstore_core::catalog::decode_products;
use rigstore_core::{Product, ProductId};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::config::StorefrontConfig;
use crate::source::{CartSink, CatalogSource, DiscountedPage};

use cache::{CacheKey, CacheValue};

// =============================================================================
// ApiClient
// =============================================================================

/// Client for the store REST API.
///
/// Cheap to clone; clones share the HTTP connection pool and the cache.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    cache: Cache<CacheKey, CacheValue>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &StorefrontConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &config.api_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|e| ApiError::Parse(format!("Invalid API token format: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.http_timeout)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.api_url.clone(),
                cache,
            }),
        })
    }

    /// Base URL endpoint paths are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Resolve an endpoint path (e.g., `products/discounted`) against the base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Url` if the path cannot be joined.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.inner.base_url.join(path.trim_start_matches('/'))?)
    }

    /// `GET` a JSON document.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the API responds with a
    /// non-success status, or the body is not the expected JSON.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut url = self.endpoint(path)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        let text = self.execute(Method::GET, url, None::<&()>).await?;
        parse_body(&text)
    }

    /// Send a request with an optional JSON body and parse the JSON response.
    ///
    /// An empty response body parses as JSON `null`, so `T` may be
    /// `serde_json::Value` or `()` for endpoints that return nothing.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the API responds with a
    /// non-success status, or the body is not the expected JSON.
    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let text = self.execute(method, url, body).await?;
        if text.trim().is_empty() {
            return parse_body("null");
        }
        parse_body(&text)
    }

    /// Drop every cached product listing.
    ///
    /// Call after writes that change the catalog (edits, discounts, deletes).
    pub async fn invalidate_products(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
        debug!("Product cache invalidated");
    }

    /// Execute a request and return the body text of a success response.
    async fn execute<B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<String, ApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let mut request = self.inner.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                method = %method,
                url = %url,
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "API returned non-success status"
            );
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: error::error_message(&response_text),
            });
        }

        Ok(response_text)
    }
}

fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %text.chars().take(500).collect::<String>(),
            "Failed to parse API response"
        );
        ApiError::Parse(e.to_string())
    })
}

// =============================================================================
// Listing payloads
// =============================================================================

/// Product listing as returned by the API: either a bare array or an object
/// wrapping the array with a total count.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ListingBody {
    Bare(Vec<serde_json::Value>),
    Wrapped {
        products: Vec<serde_json::Value>,
        #[serde(default, rename = "totalCount", alias = "total", alias = "totalProducts")]
        total_count: Option<usize>,
    },
}

impl ListingBody {
    /// Decode the products leniently and fall back to the item count when the
    /// API sends no total.
    fn into_page(self) -> DiscountedPage {
        let (documents, total) = match self {
            Self::Bare(documents) => (documents, None),
            Self::Wrapped { products, total_count } => (products, total_count),
        };
        let items = decode_products(documents);
        let total_count = total.unwrap_or(items.len());
        DiscountedPage { items, total_count }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartBody<'a> {
    product_id: &'a str,
    quantity: u32,
}

// =============================================================================
// Collaborator implementations
// =============================================================================

#[async_trait]
impl CatalogSource for ApiClient {
    #[instrument(skip(self))]
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&CacheKey::Products).await {
            debug!("Cache hit for products");
            return Ok(products.as_ref().clone());
        }

        let body: ListingBody = self.get_json("products", &[]).await?;
        let products = body.into_page().items;
        debug!(count = products.len(), "Fetched products");

        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(Arc::new(products.clone())))
            .await;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn fetch_discounted_products(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<DiscountedPage, ApiError> {
        let key = CacheKey::Discounted {
            page,
            limit: page_size,
        };
        if let Some(CacheValue::Discounted(listing)) = self.inner.cache.get(&key).await {
            debug!("Cache hit for discounted products");
            return Ok(listing.as_ref().clone());
        }

        let query = [("page", page.to_string()), ("limit", page_size.to_string())];
        let body: ListingBody = self.get_json("products/discounted", &query).await?;
        let listing = body.into_page();
        debug!(count = listing.items.len(), total = listing.total_count, "Fetched discounted products");

        self.inner
            .cache
            .insert(key, CacheValue::Discounted(Arc::new(listing.clone())))
            .await;

        Ok(listing)
    }
}

#[async_trait]
impl CartSink for ApiClient {
    #[instrument(skip(self, product_id), fields(product_id = %product_id))]
    async fn add_to_cart(&self, product_id: &ProductId, quantity: u32) -> Result<(), ApiError> {
        let body = AddToCartBody {
            product_id: product_id.as_str(),
            quantity,
        };
        let _: serde_json::Value = self.send_json(Method::POST, "cart", Some(&body)).await?;
        debug!(quantity, "Added to cart");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&StorefrontConfig::with_api_url(base).unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_joins_under_base_path() {
        let client = client("http://localhost:5000/api");
        assert_eq!(
            client.endpoint("/products/discounted").unwrap().as_str(),
            "http://localhost:5000/api/products/discounted"
        );
        assert_eq!(
            client.endpoint("orders/admin/abc123/status").unwrap().as_str(),
            "http://localhost:5000/api/orders/admin/abc123/status"
        );
    }

    #[test]
    fn test_listing_body_accepts_bare_array() {
        let body: ListingBody =
            serde_json::from_str(r#"[{"_id": "a", "price": 10}, {"_id": "b", "price": "oops"}]"#).unwrap();
        let page = body.into_page();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_count, 1);
    }

    #[test]
    fn test_listing_body_accepts_wrapped_object() {
        let body: ListingBody = serde_json::from_str(
            r#"{"products": [{"_id": "a", "price": 10, "onDiscount": true, "discountPrice": 8}], "totalCount": 17}"#,
        )
        .unwrap();
        let page = body.into_page();
        assert_eq!(page.items[0].id.as_str(), "a");
        assert_eq!(page.total_count, 17);
    }

    #[test]
    fn test_add_to_cart_body_shape() {
        let body = AddToCartBody {
            product_id: "p1",
            quantity: 1,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"productId": "p1", "quantity": 1})
        );
    }
}
