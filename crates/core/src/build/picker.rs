//! Component picker candidates.

use super::slot::Slot;
use crate::types::Product;

/// Products that may fill `slot`: same category as the slot, and `term`
/// found (case-insensitively) in the model number, title, description or
/// brand. An empty term keeps every product of the category.
pub fn component_candidates<'a>(products: &'a [Product], slot: Slot, term: &str) -> Vec<&'a Product> {
    let category = slot.category();
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|product| product.category.as_deref() == Some(category))
        .filter(|product| {
            needle.is_empty()
                || [&product.model_no, &product.title, &product.description, &product.brand]
                    .into_iter()
                    .flatten()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
