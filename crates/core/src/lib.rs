//! Rigstore Core - catalog pipeline and PC-build aggregator.
//!
//! This crate provides the types and pure logic shared by every Rigstore component:
//! - `storefront` - Client library for the public catalog, cart and PC builder
//! - `admin` - Back-office state for products, orders and users
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async runtime. Everything here runs to completion synchronously
//! and never touches shared state.
//!
//! # Modules
//!
//! - [`types`] - Ids, prices, statuses and the [`Product`] entity
//! - [`catalog`] - Filter, sort and paginate a product collection
//! - [`build`] - Slot selection, totals and validity for a custom PC build

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod build;
pub mod catalog;
pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::*;
