//! The slot-to-product mapping and its derived totals.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::slot::Slot;
use crate::error::CoreError;
use crate::types::Product;

/// Products selected for a PC build, at most one per [`Slot`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildSelection {
    slots: BTreeMap<Slot, Product>,
}

impl BuildSelection {
    /// An empty build.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `slot` set to `product`, replacing any previous
    /// selection for that slot.
    #[must_use]
    pub fn with_selection(&self, slot: Slot, product: Product) -> Self {
        let mut next = self.clone();
        next.slots.insert(slot, product);
        next
    }

    /// Return a copy with `slot` cleared.
    #[must_use]
    pub fn without_selection(&self, slot: Slot) -> Self {
        let mut next = self.clone();
        next.slots.remove(&slot);
        next
    }

    /// Set `slot` in place, returning the product it held before.
    pub fn add_selection(&mut self, slot: Slot, product: Product) -> Option<Product> {
        self.slots.insert(slot, product)
    }

    /// Clear `slot` in place, returning the product it held.
    pub fn remove_selection(&mut self, slot: Slot) -> Option<Product> {
        self.slots.remove(&slot)
    }

    /// The product selected for `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&Product> {
        self.slots.get(&slot)
    }

    /// Filled slots in enumeration order.
    pub fn selected(&self) -> impl Iterator<Item = (Slot, &Product)> {
        self.slots.iter().map(|(slot, product)| (*slot, product))
    }

    /// Number of filled slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Sum of the effective prices of every selected product.
    ///
    /// A product without a price contributes nothing.
    #[must_use]
    pub fn compute_total(&self) -> Decimal {
        self.selected()
            .map(|(slot, product)| {
                product.effective_price().unwrap_or_else(|| {
                    warn!(%slot, product_id = %product.id, "Selected product has no price");
                    Decimal::ZERO
                })
            })
            .sum()
    }

    /// Required slots that are still empty, in enumeration order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<Slot> {
        Slot::REQUIRED
            .into_iter()
            .filter(|slot| !self.slots.contains_key(slot))
            .collect()
    }

    /// Whether processor and motherboard are both selected.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Check the build can be committed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IncompleteBuild` naming the empty required slots.
    pub fn validate(&self) -> Result<(), CoreError> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::IncompleteBuild { missing })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn priced(id: &str, price: i64) -> Product {
        Product::new(id, Decimal::from(price))
    }

    #[test]
    fn test_empty_build_totals_zero_and_is_invalid() {
        let build = BuildSelection::new();
        assert_eq!(build.compute_total(), Decimal::ZERO);
        assert!(!build.is_valid());
        assert_eq!(build.missing_required(), vec![Slot::Processor, Slot::Motherboard]);
    }

    #[test]
    fn test_total_is_additive_when_filling_empty_slot() {
        let build = BuildSelection::new().with_selection(Slot::Ssd, priced("ssd", 90));
        let before = build.compute_total();

        let mut gpu = priced("gpu", 700);
        gpu.on_discount = true;
        gpu.discount_price = Some(Decimal::from(650));
        let after = build.with_selection(Slot::GraphicsCard, gpu);

        assert_eq!(after.compute_total(), before + Decimal::from(650));
    }

    #[test]
    fn test_replacing_a_slot_replaces_its_price() {
        let build = BuildSelection::new()
            .with_selection(Slot::Ram1, priced("a", 80))
            .with_selection(Slot::Ram1, priced("b", 120));
        assert_eq!(build.len(), 1);
        assert_eq!(build.compute_total(), Decimal::from(120));
    }

    #[test]
    fn test_pure_updates_leave_original_untouched() {
        let base = BuildSelection::new().with_selection(Slot::Mouse, priced("m", 25));
        let cleared = base.without_selection(Slot::Mouse);
        assert!(cleared.is_empty());
        assert_eq!(base.get(Slot::Mouse).unwrap().id.as_str(), "m");
    }

    #[test]
    fn test_validity_needs_processor_and_motherboard() {
        let mut build = BuildSelection::new();
        build.add_selection(Slot::Processor, priced("cpu", 300));
        assert!(!build.is_valid());
        assert_eq!(
            build.validate(),
            Err(CoreError::IncompleteBuild {
                missing: vec![Slot::Motherboard]
            })
        );

        build.add_selection(Slot::Motherboard, priced("mb", 150));
        assert!(build.is_valid());
        assert!(build.validate().is_ok());

        assert!(build.remove_selection(Slot::Processor).is_some());
        assert!(!build.is_valid());
    }

    #[test]
    fn test_selected_iterates_in_slot_order() {
        let build = BuildSelection::new()
            .with_selection(Slot::Headphone, priced("h", 60))
            .with_selection(Slot::Processor, priced("p", 300))
            .with_selection(Slot::Ram2, priced("r", 70));
        let slots: Vec<Slot> = build.selected().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![Slot::Processor, Slot::Ram2, Slot::Headphone]);
    }

    #[test]
    fn test_unpriced_product_contributes_zero() {
        let mut unpriced = priced("x", 0);
        unpriced.price = None;
        let build = BuildSelection::new()
            .with_selection(Slot::Casing, unpriced)
            .with_selection(Slot::Monitor, priced("mon", 200));
        assert_eq!(build.compute_total(), Decimal::from(200));
    }

    #[test]
    fn test_deserializes_from_slot_keyed_object() {
        let json = r#"{"processor": {"_id": "cpu", "price": 300}, "ram1": {"_id": "r", "price": "79.99"}}"#;
        let build: BuildSelection = serde_json::from_str(json).unwrap();
        assert_eq!(build.get(Slot::Ram1).unwrap().id.as_str(), "r");
        assert_eq!(build.compute_total(), Decimal::new(37999, 2));
    }
}
