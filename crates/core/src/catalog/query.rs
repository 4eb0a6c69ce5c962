//! The full filter, sort, paginate pipeline.

use serde::{Deserialize, Serialize};

use super::filter::{FilterCriteria, filter_products};
use super::page::{Page, Pagination, paginate};
use super::sort::{SortOption, sort_products};
use crate::types::Product;

/// Run the catalog pipeline over `products`.
///
/// Filters, then stable-sorts, then cuts out the requested page. The result
/// borrows from `products`, which is left untouched.
#[must_use]
pub fn query<'a>(
    products: &'a [Product],
    criteria: &FilterCriteria,
    sort: SortOption,
    pagination: Pagination,
) -> Page<&'a Product> {
    let mut matched = filter_products(products, criteria);
    sort_products(&mut matched, sort);
    paginate(matched, pagination)
}

/// Everything needed to cut one catalog view out of a product collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    /// Filter criteria.
    pub criteria: FilterCriteria,
    /// Sort option.
    pub sort: SortOption,
    /// Page window.
    pub pagination: Pagination,
}

impl CatalogQuery {
    /// A query matching everything, unsorted, first page of the default size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter criteria.
    #[must_use]
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Set the sort option.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set the page window.
    #[must_use]
    pub const fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Run this query over `products`.
    #[must_use]
    pub fn run<'a>(&self, products: &'a [Product]) -> Page<&'a Product> {
        query(products, &self.criteria, self.sort, self.pagination)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn catalog() -> Vec<Product> {
        (1..=10)
            .map(|i| {
                let mut p = Product::new(format!("p{i}"), Decimal::from(i * 10));
                p.category = Some(if i % 2 == 0 { "RAM" } else { "SSD" }.to_string());
                p
            })
            .collect()
    }

    #[test]
    fn test_filter_then_sort_then_page() {
        let products = catalog();
        let page = CatalogQuery::new()
            .with_criteria(FilterCriteria::new().with_category("RAM"))
            .with_sort(SortOption::PriceHigh)
            .with_pagination(Pagination::new(1, 2))
            .run(&products);

        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 3);
        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p10", "p8"]);
    }

    #[test]
    fn test_empty_catalog() {
        let page = query(&[], &FilterCriteria::new(), SortOption::Newest, Pagination::default());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_input_is_not_reordered() {
        let products = catalog();
        let before = products.clone();
        let _ = query(&products, &FilterCriteria::new(), SortOption::PriceHigh, Pagination::default());
        assert_eq!(products, before);
    }
}
