//! PC-build aggregator.
//!
//! A build maps each [`Slot`] to at most one selected [`Product`]. The total
//! price is always recomputed from the current selection, and a build is
//! valid once its required slots (processor and motherboard) are filled.
//!
//! ```
//! use rigstore_core::build::{BuildSelection, Slot};
//! use rigstore_core::Product;
//! use rust_decimal::Decimal;
//!
//! let build = BuildSelection::new()
//!     .with_selection(Slot::Processor, Product::new("cpu", Decimal::from(300)))
//!     .with_selection(Slot::Motherboard, Product::new("mb", Decimal::from(180)));
//!
//! assert!(build.is_valid());
//! assert_eq!(build.compute_total(), Decimal::from(480));
//! ```

mod picker;
mod selection;
mod slot;

pub use picker::component_candidates;
pub use selection::BuildSelection;
pub use slot::{Section, Slot};
