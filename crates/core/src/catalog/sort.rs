//! Sort stage of the catalog pipeline.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Product;

/// Sort options for catalog views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Keep the incoming order.
    #[default]
    Default,
    /// Effective price, low to high.
    PriceLow,
    /// Effective price, high to low.
    PriceHigh,
    /// Biggest rounded savings percentage first.
    DiscountPercent,
    /// Most recently created first.
    Newest,
}

impl SortOption {
    /// All options in menu order.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::PriceLow,
        Self::PriceHigh,
        Self::DiscountPercent,
        Self::Newest,
    ];

    /// Wire / query-string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceLow => "price_low",
            Self::PriceHigh => "price_high",
            Self::DiscountPercent => "discount_percent",
            Self::Newest => "newest",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default sorting",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::DiscountPercent => "Biggest Discount",
            Self::Newest => "Newest First",
        }
    }

    /// Compare two products under this option.
    ///
    /// Products missing the sort key order after those that have it, in
    /// either direction, so the ordering stays total.
    #[must_use]
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Default => Ordering::Equal,
            Self::PriceLow => present_first(a.effective_price(), b.effective_price(), |x, y| x.cmp(&y)),
            Self::PriceHigh => present_first(a.effective_price(), b.effective_price(), |x, y| y.cmp(&x)),
            Self::DiscountPercent => b.savings_percent().cmp(&a.savings_percent()),
            Self::Newest => present_first(a.created_at, b.created_at, |x, y| y.cmp(&x)),
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSort(s.to_string()))
    }
}

fn present_first<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable-sort products in place; ties keep their incoming order.
pub fn sort_products(products: &mut [&Product], sort: SortOption) {
    if sort == SortOption::Default {
        return;
    }
    products.sort_by(|a, b| sort.compare(a, b));
}
