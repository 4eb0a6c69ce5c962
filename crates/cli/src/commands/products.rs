//! Catalog listing command.
//!
//! # Usage
//!
//! ```bash
//! # Cheapest Corsair RAM under $150, four per page
//! rigstore products --category RAM --brand Corsair --max 150 --sort price_low --per-page 4
//!
//! # Second page of discounted products, biggest saving first
//! rigstore products --discounted --sort discount_percent --page 2
//! ```

use rigstore_core::catalog::filter::ALL;
use rigstore_core::catalog::{PER_PAGE_CHOICES, Page, PriceRange, SortOption, is_known_brand, is_known_category};
use rigstore_core::{Product, format_price};
use rigstore_storefront::services::{CatalogView, fetch_discounted_view};
use rigstore_storefront::source::CatalogSource;

use super::{CommandError, connect};

/// Filters and paging for a listing.
#[derive(Debug, Clone, Default)]
pub struct ListingArgs {
    pub search: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub discounted: bool,
}

impl ListingArgs {
    /// Build the view these arguments describe.
    fn view(&self) -> Result<CatalogView, CommandError> {
        let mut view = CatalogView::new();
        if let Some(per_page) = self.per_page {
            if !PER_PAGE_CHOICES.contains(&per_page) {
                return Err(CommandError::InvalidPerPage(per_page));
            }
            view.set_items_per_page(per_page);
        }
        if let Some(search) = &self.search {
            view.set_search(search.as_str());
        }
        if let Some(category) = &self.category {
            if category != ALL && !is_known_category(category) {
                tracing::warn!(%category, "Category is not offered in the catalog filters");
            }
            view.set_category(category.as_str());
        }
        if let Some(brand) = &self.brand {
            if brand != ALL && !is_known_brand(brand) {
                tracing::warn!(%brand, "Brand is not offered in the catalog filters");
            }
            view.set_brand(brand.as_str());
        }
        let range = PriceRange::parse(
            self.min.as_deref().unwrap_or_default(),
            self.max.as_deref().unwrap_or_default(),
        )?;
        view.set_price_range(range);
        if let Some(sort) = &self.sort {
            view.set_sort(sort.parse::<SortOption>()?);
        }
        if let Some(page) = self.page {
            view.go_to_page(page);
        }
        Ok(view)
    }
}

/// List one page of the catalog.
pub async fn list(args: &ListingArgs) -> Result<(), CommandError> {
    let view = args.view()?;
    let client = connect()?;

    let page = if args.discounted {
        fetch_discounted_view(&client, &view).await?
    } else {
        let products = client.fetch_products().await?;
        view.query(&products).cloned()
    };

    tracing::info!(
        total = page.total_count,
        page = page.current_page,
        pages = page.total_pages,
        "Listing ready"
    );
    print_page(&page);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_page(page: &Page<Product>) {
    if page.is_empty() {
        println!("No products found.");
    }
    for product in &page.items {
        println!("{}", product_line(product));
    }
    println!(
        "Page {} of {} ({} products)",
        page.current_page, page.total_pages, page.total_count
    );
}

/// One listing line: id, name, price, savings and stock.
fn product_line(product: &Product) -> String {
    let price = product
        .effective_price()
        .map_or_else(|| "-".to_string(), format_price);
    let savings = match product.savings_percent() {
        0 => String::new(),
        pct => format!(" (-{pct}%)"),
    };
    let stock = if product.is_in_stock() { "" } else { " [out of stock]" };
    format!("{:<26} {:<40} {price}{savings}{stock}", product.id, product.display_name())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_args_build_view() {
        let args = ListingArgs {
            category: Some("RAM".to_string()),
            max: Some("150".to_string()),
            sort: Some("price_low".to_string()),
            page: Some(2),
            per_page: Some(4),
            ..ListingArgs::default()
        };
        let view = args.view().unwrap();
        assert_eq!(view.sort(), SortOption::PriceLow);
        assert_eq!(view.pagination().current_page, 2);
        assert_eq!(view.pagination().items_per_page, 4);
        assert_eq!(view.criteria().price_range.max, Some(Decimal::from(150)));
    }

    #[test]
    fn test_args_reject_bad_sort() {
        let args = ListingArgs {
            sort: Some("cheapest".to_string()),
            ..ListingArgs::default()
        };
        assert!(matches!(args.view(), Err(CommandError::Input(_))));
    }

    #[test]
    fn test_args_reject_unoffered_page_size() {
        let args = ListingArgs {
            per_page: Some(10),
            ..ListingArgs::default()
        };
        assert!(matches!(args.view(), Err(CommandError::InvalidPerPage(10))));

        let args = ListingArgs {
            per_page: Some(12),
            ..ListingArgs::default()
        };
        assert_eq!(args.view().unwrap().pagination().items_per_page, 12);
    }

    #[test]
    fn test_unknown_brand_is_still_applied() {
        let args = ListingArgs {
            brand: Some("Acme".to_string()),
            ..ListingArgs::default()
        };
        let view = args.view().unwrap();
        assert_eq!(view.criteria().brand.value(), Some("Acme"));
    }

    #[test]
    fn test_product_line_shows_savings_and_stock() {
        let mut product = Product::new("p1", Decimal::from(200));
        product.title = Some("RTX 4060".to_string());
        product.on_discount = true;
        product.discount_price = Some(Decimal::from(150));

        let line = product_line(&product);
        assert!(line.contains("$150.00 (-25%)"));
        assert!(line.contains("[out of stock]"));
    }
}
