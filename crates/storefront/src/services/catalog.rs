//! Catalog view state.
//!
//! [`CatalogView`] holds what a shopper has chosen on a listing page
//! (search, category, brand, price bounds, sort, page, page size) and cuts
//! the visible page out of a product collection with the core pipeline.

use rigstore_core::catalog::{Choice, FilterCriteria, Page, Pagination, PriceRange, SortOption, query};
use rigstore_core::{CoreError, Product};
use tracing::{debug, instrument};
use url::Url;

use crate::error::Result;
use crate::source::CatalogSource;

/// Query parameter holding the search term.
pub const SEARCH_PARAM: &str = "search";

/// Query parameter holding the category.
pub const CATEGORY_PARAM: &str = "category";

/// Listing page state.
///
/// Changing any filter or the page size moves back to page 1; changing the
/// sort keeps the current page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogView {
    criteria: FilterCriteria,
    sort: SortOption,
    pagination: Pagination,
}

impl CatalogView {
    /// Unfiltered, unsorted, first page of the default size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the search term and category from `search` and `category` query
    /// parameters. Values are taken as-is.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        let mut view = Self::new();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                SEARCH_PARAM => view.criteria.search_term = value.into_owned(),
                CATEGORY_PARAM => view.criteria.category = Choice::parse(&value),
                _ => {}
            }
        }
        view
    }

    /// Write the search term and category back into `url`.
    ///
    /// `search` is set only when non-empty and `category` only when not
    /// `All`; other query parameters are preserved.
    pub fn apply_to_url(&self, url: &mut Url) {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != SEARCH_PARAM && key != CATEGORY_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut pairs = kept;
        if !self.criteria.search_term.is_empty() {
            pairs.push((SEARCH_PARAM.to_string(), self.criteria.search_term.clone()));
        }
        if let Some(category) = self.criteria.category.value() {
            pairs.push((CATEGORY_PARAM.to_string(), category.to_string()));
        }

        if pairs.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }
    }

    /// Current filter criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Current sort option.
    #[must_use]
    pub const fn sort(&self) -> SortOption {
        self.sort
    }

    /// Current page window.
    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Set the search term and go back to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        self.reset_page();
    }

    /// Set the category selection and go back to page 1.
    pub fn set_category(&mut self, category: impl Into<Choice>) {
        self.criteria.category = category.into();
        self.reset_page();
    }

    /// Set the brand selection and go back to page 1.
    pub fn set_brand(&mut self, brand: impl Into<Choice>) {
        self.criteria.brand = brand.into();
        self.reset_page();
    }

    /// Set the price bounds and go back to page 1.
    pub fn set_price_range(&mut self, range: PriceRange) {
        self.criteria.price_range = range;
        self.reset_page();
    }

    /// Set price bounds from text inputs; blank inputs leave a bound open.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPriceBound` if an input is not a number.
    /// The view is left unchanged in that case.
    pub fn set_price_inputs(&mut self, min: &str, max: &str) -> std::result::Result<(), CoreError> {
        let range = PriceRange::parse(min, max)?;
        self.set_price_range(range);
        Ok(())
    }

    /// Change the page size and go back to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: u32) {
        self.pagination = Pagination::new(1, items_per_page);
    }

    /// Change the sort; the current page is kept.
    pub const fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    /// Move to `page` (1-indexed; 0 is treated as 1).
    pub fn go_to_page(&mut self, page: u32) {
        self.pagination = self.pagination.with_page(page);
    }

    /// Clear every filter, the sort and the page. The page size is kept.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::new();
        self.sort = SortOption::Default;
        self.reset_page();
    }

    /// The visible page of `products` under this view.
    #[must_use]
    pub fn query<'a>(&self, products: &'a [Product]) -> Page<&'a Product> {
        query(products, &self.criteria, self.sort, self.pagination)
    }

    fn reset_page(&mut self) {
        self.pagination = self.pagination.with_page(1);
    }
}

/// Fetch the discounted listing for `view`.
///
/// The server returns one page of discounted products for the view's page
/// and page size. That page is then filtered and sorted locally. When no
/// filter is active the server total drives the pager; otherwise the pager
/// reflects what matched on this page.
///
/// # Errors
///
/// Returns `StoreError::Fetch` if the source fails.
#[instrument(skip(source, view), fields(page = view.pagination.current_page))]
pub async fn fetch_discounted_view<S>(source: &S, view: &CatalogView) -> Result<Page<Product>>
where
    S: CatalogSource + ?Sized,
{
    let window = view.pagination;
    let listing = source
        .fetch_discounted_products(window.current_page, window.items_per_page)
        .await?;

    let local = query(
        &listing.items,
        &view.criteria,
        view.sort,
        Pagination::new(1, window.items_per_page),
    );

    let total_count = if view.criteria.is_empty() {
        listing.total_count
    } else {
        local.total_count
    };
    debug!(fetched = listing.items.len(), shown = local.items.len(), total_count, "Discounted view");

    let mut page = local.cloned();
    page.total_count = total_count;
    page.total_pages = window.total_pages(total_count);
    page.current_page = window.current_page;
    Ok(page)
}
