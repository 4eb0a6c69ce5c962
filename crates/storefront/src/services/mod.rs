//! Storefront services built on the core pipeline and the collaborator traits.
//!
//! - [`catalog`] - Catalog view state and the discounted listing
//! - [`cart`] - Single-product add-to-cart with a local stock check
//! - [`build`] - PC-build session with component picker and cart commit

pub mod build;
pub mod cart;
pub mod catalog;

pub use build::{BuildSession, CommitError, CommitFailure, CommitReport, commit_build_to_cart};
pub use cart::add_product_to_cart;
pub use catalog::{CatalogView, fetch_discounted_view};
