//! Filter stage of the catalog pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Product;

/// Sentinel that disables a category or brand filter.
pub const ALL: &str = "All";

/// A category or brand selection: everything, or one exact value.
///
/// Values are compared by plain string identity, so a value outside the fixed
/// option lists (e.g., from a hand-edited URL) is accepted and simply matches
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// Parse a selection; `"All"` and the empty string mean no filter.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Whether this selection disables filtering.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The selected value, or `None` for [`Choice::All`].
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(v),
        }
    }

    /// Whether a product attribute satisfies this selection.
    ///
    /// A missing attribute only passes when the selection is `All`.
    #[must_use]
    pub fn matches(&self, attribute: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => attribute == Some(wanted.as_str()),
        }
    }
}

impl From<String> for Choice {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<Choice> for String {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::All => ALL.to_string(),
            Choice::Only(v) => v,
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value().unwrap_or(ALL))
    }
}

/// Inclusive price bounds applied to the effective price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest accepted price, unconstrained when `None`.
    pub min: Option<Decimal>,
    /// Highest accepted price, unconstrained when `None`.
    pub max: Option<Decimal>,
}

impl PriceRange {
    /// Create a price range from optional bounds.
    #[must_use]
    pub const fn new(min: Option<Decimal>, max: Option<Decimal>) -> Self {
        Self { min, max }
    }

    /// Parse bounds from text inputs; an empty (or blank) input leaves that
    /// bound open.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPriceBound` if a non-empty input is not a
    /// decimal number.
    pub fn parse(min: &str, max: &str) -> Result<Self, CoreError> {
        Ok(Self {
            min: parse_bound("min", min)?,
            max: parse_bound("max", max)?,
        })
    }

    /// Whether both bounds are open.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether `price` lies within the bounds.
    ///
    /// An unbounded range accepts everything, including a missing price. Once
    /// either bound is set, a missing price never matches.
    #[must_use]
    pub fn contains(&self, price: Option<Decimal>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(price) = price else {
            return false;
        };
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

fn parse_bound(bound: &'static str, input: &str) -> Result<Option<Decimal>, CoreError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<Decimal>()
        .map(Some)
        .map_err(|_| CoreError::InvalidPriceBound {
            bound,
            value: input.to_string(),
        })
}

/// Criteria a product must satisfy to appear in a catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring searched in model number, title,
    /// description, category and brand. Empty matches everything.
    pub search_term: String,
    /// Category selection.
    pub category: Choice,
    /// Brand selection.
    pub brand: Choice,
    /// Price bounds on the effective price.
    pub price_range: PriceRange,
}

impl FilterCriteria {
    /// Criteria that match every product.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the category selection.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<Choice>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the brand selection.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<Choice>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the price bounds.
    #[must_use]
    pub const fn with_price_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    /// Whether no criterion is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.category.is_all()
            && self.brand.is_all()
            && self.price_range.is_unbounded()
    }

    /// Whether `product` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.category.matches(product.category.as_deref())
            && self.brand.matches(product.brand.as_deref())
            && self.price_range.contains(product.effective_price())
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        [
            &product.model_no,
            &product.title,
            &product.description,
            &product.category,
            &product.brand,
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Keep the products matching `criteria`, preserving their relative order.
///
/// The input is never modified; the result borrows from it.
pub fn filter_products<'a, I>(products: I, criteria: &FilterCriteria) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|product| criteria.matches(product))
        .collect()
}
