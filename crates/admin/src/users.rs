//! Registered users list.

use rigstore_storefront::error::Result;
use tracing::{error, instrument};

use crate::api::AdminApi;
use crate::types::User;

#[derive(Debug, Clone, Default)]
pub struct UserList {
    users: Vec<User>,
    loading: bool,
    error: Option<String>,
}

impl UserList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Load every registered user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fetch` if the API fails; the previous list is kept.
    #[instrument(skip_all)]
    pub async fn fetch_all_users<A>(&mut self, api: &A) -> Result<&[User]>
    where
        A: AdminApi + ?Sized,
    {
        self.loading = true;
        let result = api.fetch_all_users().await;
        self.loading = false;
        match result {
            Ok(users) => {
                self.users = users;
                self.error = None;
                Ok(&self.users)
            }
            Err(e) => {
                error!(error = %e, "Error fetching users");
                self.error = Some("Failed to fetch users".to_string());
                Err(e.into())
            }
        }
    }
}
