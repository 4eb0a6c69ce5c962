//! Product management with declarative modal state.
//!
//! At most one modal is open at a time and it always names the product it
//! belongs to. A modal closes only when its operation succeeds; on failure
//! it stays open and the API's message is kept in [`ProductManager::error`].

use rigstore_core::{Product, ProductId};
use rigstore_storefront::error::Result;
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use crate::api::AdminApi;
use crate::types::ProductUpdate;

/// Which product modal is open.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductModal {
    Edit(ProductId),
    Discount(ProductId),
    Delete(ProductId),
}

impl ProductModal {
    /// Product the modal belongs to.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        match self {
            Self::Edit(id) | Self::Discount(id) | Self::Delete(id) => id,
        }
    }
}

/// Products tab state.
#[derive(Debug, Clone, Default)]
pub struct ProductManager {
    products: Vec<Product>,
    modal: Option<ProductModal>,
    loading: bool,
    error: Option<String>,
}

impl ProductManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub const fn modal(&self) -> Option<&ProductModal> {
        self.modal.as_ref()
    }

    /// Whether `modal` is the one currently open.
    #[must_use]
    pub fn is_open(&self, modal: &ProductModal) -> bool {
        self.modal.as_ref() == Some(modal)
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed operation.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Load the product list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fetch` if the API fails; the previous list is kept.
    #[instrument(skip_all)]
    pub async fn load<A>(&mut self, api: &A) -> Result<()>
    where
        A: AdminApi + ?Sized,
    {
        self.loading = true;
        let result = api.fetch_products().await;
        self.loading = false;
        match result {
            Ok(products) => {
                self.products = products;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load products");
                self.error = Some("Failed to fetch products".to_string());
                Err(e.into())
            }
        }
    }

    /// Open a modal, replacing any other and clearing the last error.
    pub fn open(&mut self, modal: ProductModal) {
        self.error = None;
        self.modal = Some(modal);
    }

    pub fn close(&mut self) {
        self.modal = None;
    }

    /// Save edits to a product.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fetch` if the API rejects the update.
    #[instrument(skip(self, api, update), fields(product_id = %id))]
    pub async fn update_product<A>(&mut self, api: &A, id: &ProductId, update: &ProductUpdate) -> Result<()>
    where
        A: AdminApi + ?Sized,
    {
        let result = api.update_product(id, update).await;
        self.finish(&ProductModal::Edit(id.clone()), result.map(Some), "Failed to update product")?;
        info!("Product updated");
        Ok(())
    }

    /// Apply a discount price, or remove the discount when `None`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fetch` if the API rejects the change.
    #[instrument(skip(self, api), fields(product_id = %id))]
    pub async fn toggle_discount<A>(&mut self, api: &A, id: &ProductId, discount_price: Option<Decimal>) -> Result<()>
    where
        A: AdminApi + ?Sized,
    {
        let result = api.set_discount(id, discount_price).await;
        self.finish(&ProductModal::Discount(id.clone()), result.map(Some), "Failed to update discount")?;
        info!(applied = discount_price.is_some(), "Product discount updated");
        Ok(())
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fetch` if the API rejects the delete.
    #[instrument(skip(self, api), fields(product_id = %id))]
    pub async fn delete_product<A>(&mut self, api: &A, id: &ProductId) -> Result<()>
    where
        A: AdminApi + ?Sized,
    {
        let result = api.delete_product(id).await;
        self.finish(&ProductModal::Delete(id.clone()), result.map(|()| None), "Failed to delete product")?;
        self.products.retain(|p| &p.id != id);
        info!("Product deleted");
        Ok(())
    }

    /// Record the outcome of a modal operation.
    ///
    /// On success the stored product replaces the local copy and the modal
    /// closes if it is still the one open. On failure the modal stays open.
    fn finish(
        &mut self,
        modal: &ProductModal,
        result: std::result::Result<Option<Product>, rigstore_storefront::api::ApiError>,
        fallback: &str,
    ) -> Result<()> {
        match result {
            Ok(stored) => {
                if let Some(stored) = stored
                    && let Some(local) = self.products.iter_mut().find(|p| p.id == stored.id)
                {
                    *local = stored;
                }
                if self.is_open(modal) {
                    self.modal = None;
                }
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Product operation failed");
                self.error = Some(e.api_message().unwrap_or(fallback).to_string());
                Err(e.into())
            }
        }
    }
}
