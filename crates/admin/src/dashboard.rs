//! Management dashboard tabs.

use rigstore_storefront::error::Result;
use tracing::{debug, instrument};

use crate::api::AdminApi;
use crate::orders::OrderStore;
use crate::products::ProductManager;
use crate::users::UserList;

/// Dashboard tabs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Create,
    Products,
    Orders,
    Users,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Create, Self::Products, Self::Orders, Self::Users];

    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Users => "users",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Create => "Create Product",
            Self::Products => "Products",
            Self::Orders => "Orders",
            Self::Users => "Users",
        }
    }
}

/// Back-office dashboard: the active tab and each tab's state.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    active: Tab,
    pub products: ProductManager,
    pub orders: OrderStore,
    pub users: UserList,
}

impl Dashboard {
    /// Dashboard opened on the `Create` tab with nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.active
    }

    /// Switch to `tab` and load its data.
    ///
    /// `Create` loads nothing. The tab switches even if loading fails.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fetch` if the tab's data cannot be loaded.
    #[instrument(skip(self, api))]
    pub async fn activate<A>(&mut self, api: &A, tab: Tab) -> Result<()>
    where
        A: AdminApi + ?Sized,
    {
        self.active = tab;
        debug!(tab = tab.id(), "Dashboard tab activated");
        match tab {
            Tab::Create => Ok(()),
            Tab::Products => self.products.load(api).await,
            Tab::Orders => self.orders.fetch_all_orders(api).await.map(|_| ()),
            Tab::Users => self.users.fetch_all_users(api).await.map(|_| ()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rigstore_core::{Product, UserRole};
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;
    use crate::fake::FakeApi;
    use crate::types::User;

    #[tokio::test]
    async fn test_each_tab_loads_its_own_data() {
        let mut api = FakeApi::with_products(vec![Product::new("p1", Decimal::from(10))]);
        api.users = vec![serde_json::from_value::<User>(json!({"_id": "u1", "role": "admin"})).unwrap()];
        let mut dashboard = Dashboard::new();

        dashboard.activate(&api, Tab::Create).await.unwrap();
        assert!(api.calls.lock().unwrap().is_empty());

        dashboard.activate(&api, Tab::Products).await.unwrap();
        dashboard.activate(&api, Tab::Orders).await.unwrap();
        dashboard.activate(&api, Tab::Users).await.unwrap();

        assert_eq!(
            *api.calls.lock().unwrap(),
            vec!["fetch_products", "fetch_all_orders", "fetch_all_users"]
        );
        assert_eq!(dashboard.active_tab(), Tab::Users);
        assert_eq!(dashboard.products.products().len(), 1);
        assert_eq!(dashboard.users.users()[0].role, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_tab_switches_even_when_load_fails() {
        let api = FakeApi {
            reject: Some("Forbidden".to_string()),
            ..FakeApi::default()
        };
        let mut dashboard = Dashboard::new();

        assert!(dashboard.activate(&api, Tab::Users).await.is_err());
        assert_eq!(dashboard.active_tab(), Tab::Users);
        assert_eq!(dashboard.users.error(), Some("Failed to fetch users"));
    }

    #[test]
    fn test_tab_order_and_labels() {
        let ids: Vec<&str> = Tab::ALL.iter().map(Tab::id).collect();
        assert_eq!(ids, vec!["create", "products", "orders", "users"]);
        assert_eq!(Tab::default().label(), "Create Product");
    }
}
