//! Rigstore Admin library.
//!
//! Back-office client state over the store REST API: the management
//! dashboard tabs, product management with declarative modals, the order
//! store and the user list.
//!
//! Every operation takes an [`AdminApi`]; [`ApiClient`] implements it over
//! HTTP.
//!
//! [`ApiClient`]: rigstore_storefront::api::ApiClient

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod types;
pub mod users;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod fake;

pub use api::AdminApi;
pub use dashboard::{Dashboard, Tab};
pub use orders::OrderStore;
pub use products::{ProductManager, ProductModal};
pub use users::UserList;
