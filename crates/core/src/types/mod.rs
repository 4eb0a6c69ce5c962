//! Core types for Rigstore.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod status;

pub use id::*;
pub use price::{format_price, savings_percent};
pub use product::Product;
pub use status::*;
