//! The product entity as served by the catalog API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::savings_percent;

/// A product in the catalog.
///
/// Every descriptive and numeric field is optional on the wire. The query
/// pipeline treats a missing field as "does not match" rather than as an
/// error, so a half-filled record simply drops out of filtered views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Document id.
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductId,
    /// Marketing title.
    #[serde(default)]
    pub title: Option<String>,
    /// Manufacturer model number (e.g., "Ryzen 7 7800X3D").
    #[serde(default)]
    pub model_no: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Catalog category (e.g., "Processor").
    #[serde(default)]
    pub category: Option<String>,
    /// Manufacturer brand (e.g., "AMD").
    #[serde(default)]
    pub brand: Option<String>,
    /// Base price.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Whether the discount price is currently in effect.
    #[serde(default)]
    pub on_discount: bool,
    /// Discounted price, only meaningful while `on_discount` is set.
    #[serde(default)]
    pub discount_price: Option<Decimal>,
    /// Units in stock.
    #[serde(default)]
    pub stock: i64,
    /// Creation timestamp, used for "newest" ordering.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Image URL, passed through untouched.
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Create a product with only an id and a base price.
    ///
    /// Handy for tests and fixtures; every other field is empty.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            title: None,
            model_no: None,
            description: None,
            category: None,
            brand: None,
            price: Some(price),
            on_discount: false,
            discount_price: None,
            stock: 0,
            created_at: None,
            image: None,
        }
    }

    /// The price the customer actually pays.
    ///
    /// The discount price while on discount, otherwise the base price.
    /// `None` when the relevant field is missing.
    #[must_use]
    pub const fn effective_price(&self) -> Option<Decimal> {
        if self.on_discount {
            self.discount_price
        } else {
            self.price
        }
    }

    /// Whole-percent saving of the effective price over the base price.
    ///
    /// Zero when not discounted, when the base price is zero, or when either
    /// price is missing.
    #[must_use]
    pub fn savings_percent(&self) -> i64 {
        match (self.price, self.effective_price()) {
            (Some(price), Some(effective)) => savings_percent(price, effective),
            _ => 0,
        }
    }

    /// Whether the product can be added to a cart.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Name shown on cards: the title, falling back to the model number.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.model_no.as_deref())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_document() {
        let json = r#"{
            "_id": "65a1f0c3b2",
            "modelNo": "RTX 4070 Super",
            "title": "GeForce RTX 4070 Super",
            "category": "Graphics Card",
            "brand": "NVIDIA",
            "price": 649.99,
            "onDiscount": true,
            "discountPrice": 599.99,
            "stock": 4,
            "createdAt": "2024-05-01T10:00:00Z"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "65a1f0c3b2");
        assert_eq!(product.model_no.as_deref(), Some("RTX 4070 Super"));
        assert_eq!(product.effective_price(), Some(Decimal::new(59999, 2)));
        assert!(product.is_in_stock());
        assert!(product.created_at.is_some());
    }

    #[test]
    fn test_deserialize_sparse_document() {
        let product: Product = serde_json::from_str(r#"{"_id": "x"}"#).unwrap();
        assert_eq!(product.effective_price(), None);
        assert!(!product.on_discount);
        assert!(!product.is_in_stock());
        assert_eq!(product.savings_percent(), 0);
    }

    #[test]
    fn test_effective_price_ignores_discount_when_off() {
        let mut product = Product::new("p1", Decimal::from(100));
        product.discount_price = Some(Decimal::from(80));
        assert_eq!(product.effective_price(), Some(Decimal::from(100)));

        product.on_discount = true;
        assert_eq!(product.effective_price(), Some(Decimal::from(80)));
        assert_eq!(product.savings_percent(), 20);
    }

    #[test]
    fn test_display_name_falls_back_to_model_no() {
        let mut product = Product::new("p1", Decimal::ONE);
        product.model_no = Some("B650 Tomahawk".to_string());
        assert_eq!(product.display_name(), "B650 Tomahawk");

        product.title = Some("MAG B650 Tomahawk WiFi".to_string());
        assert_eq!(product.display_name(), "MAG B650 Tomahawk WiFi");
    }
}
