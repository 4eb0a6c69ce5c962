//! Catalog query pipeline.
//!
//! Turns a raw product collection plus filter, sort and pagination parameters
//! into the page of products to display. The stages always run in the same
//! order:
//!
//! 1. [`filter`] - keep products matching every criterion, order preserved
//! 2. [`sort`] - stable sort by effective price, savings or recency
//! 3. [`page`] - slice out the requested page
//!
//! Nothing here fails: missing product fields make a product drop out of a
//! filtered view instead of raising an error.
//!
//! # Example
//!
//! ```rust
//! use rigstore_core::catalog::{CatalogQuery, FilterCriteria, Pagination, SortOption};
//! use rigstore_core::Product;
//! use rust_decimal::Decimal;
//!
//! let products = vec![
//!     Product::new("a", Decimal::from(300)),
//!     Product::new("b", Decimal::from(100)),
//! ];
//!
//! let page = CatalogQuery::new()
//!     .with_criteria(FilterCriteria::new().with_price_range(None, Some(Decimal::from(200))))
//!     .with_sort(SortOption::PriceLow)
//!     .with_pagination(Pagination::new(1, 8))
//!     .run(&products);
//!
//! assert_eq!(page.total_count, 1);
//! assert_eq!(page.items[0].id.as_str(), "b");
//! ```

mod decode;
pub mod filter;
mod options;
pub mod page;
mod query;
pub mod sort;

pub use decode::decode_products;
pub use filter::{Choice, FilterCriteria, PriceRange, filter_products};
pub use options::{BRAND_OPTIONS, CATEGORY_OPTIONS, is_known_brand, is_known_category};
pub use page::{DEFAULT_ITEMS_PER_PAGE, PER_PAGE_CHOICES, Page, Pagination, paginate};
pub use query::{CatalogQuery, query};
pub use sort::{SortOption, sort_products};
