//! Admin order store.

use rigstore_core::OrderId;
use rigstore_storefront::error::Result;
use tracing::{error, info, instrument};

use crate::api::AdminApi;
use crate::types::{Order, StatusUpdate};

/// Orders tab state: every order, the one being inspected, and request status.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
    current: Option<Order>,
    loading: bool,
    error: Option<String>,
}

impl OrderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Order opened with [`fetch_order_details`](Self::fetch_order_details).
    #[must_use]
    pub const fn current(&self) -> Option<&Order> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Load every order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fetch` if the API fails; the previous list is kept.
    #[instrument(skip_all)]
    pub async fn fetch_all_orders<A>(&mut self, api: &A) -> Result<&[Order]>
    where
        A: AdminApi + ?Sized,
    {
        self.loading = true;
        let result = api.fetch_all_orders().await;
        self.loading = false;
        match result {
            Ok(orders) => {
                info!(count = orders.len(), "Orders loaded");
                self.orders = orders;
                Ok(&self.orders)
            }
            Err(e) => {
                error!(error = %e, "Error fetching all orders");
                self.error = Some("Failed to fetch orders. Please try again.".to_string());
                Err(e.into())
            }
        }
    }

    /// Load one order into [`current`](Self::current).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fetch` if the API fails.
    #[instrument(skip(self, api), fields(order_id = %id))]
    pub async fn fetch_order_details<A>(&mut self, api: &A, id: &OrderId) -> Result<&Order>
    where
        A: AdminApi + ?Sized,
    {
        self.loading = true;
        let result = api.fetch_order(id).await;
        self.loading = false;
        match result {
            Ok(order) => Ok(self.current.insert(order)),
            Err(e) => {
                error!(error = %e, "Error fetching order details");
                self.error = Some("Failed to fetch order details. Please try again.".to_string());
                Err(e.into())
            }
        }
    }

    /// Update an order's status.
    ///
    /// On success the matching order in the list is patched locally (order
    /// status replaced, payment status replaced only when supplied) and the
    /// stored order becomes [`current`](Self::current).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fetch` if the API rejects the update; local state
    /// is left unchanged.
    #[instrument(skip(self, api), fields(order_id = %id))]
    pub async fn update_order_status<A>(&mut self, api: &A, id: &OrderId, update: StatusUpdate) -> Result<&Order>
    where
        A: AdminApi + ?Sized,
    {
        self.loading = true;
        let result = api.update_order_status(id, &update).await;
        self.loading = false;
        match result {
            Ok(stored) => {
                if let Some(order) = self.orders.iter_mut().find(|o| &o.id == id) {
                    update.apply(order);
                }
                info!(status = %update.order_status, "Order status updated");
                Ok(self.current.insert(stored))
            }
            Err(e) => {
                error!(error = %e, "Error updating order status");
                Err(e.into())
            }
        }
    }

    /// Forget the order being inspected.
    pub fn clear_current(&mut self) {
        self.current = None;
    }
}
