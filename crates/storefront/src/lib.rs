//! Rigstore Storefront library.
//!
//! Client-side storefront for the Rigstore REST API: configuration, the HTTP
//! client, catalog view state, single-product add-to-cart, and the PC-build
//! session that commits a build to the cart.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`api`] - `reqwest` client with a `moka` listing cache
//! - [`source`] - `CatalogSource` and `CartSink` collaborator traits
//! - [`services`] - Catalog view, cart and build session
//! - [`error`] - `StoreError`

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod source;

pub use error::StoreError;
