//! Lenient decoding of product documents.

use tracing::warn;

use crate::types::Product;

/// Decode raw product documents, skipping any that do not fit [`Product`].
///
/// One malformed record (e.g., a price that is not a number) drops out of the
/// catalog instead of failing the whole listing.
#[must_use]
pub fn decode_products(documents: Vec<serde_json::Value>) -> Vec<Product> {
    documents
        .into_iter()
        .enumerate()
        .filter_map(|(index, document)| match serde_json::from_value(document) {
            Ok(product) => Some(product),
            Err(e) => {
                warn!(index, error = %e, "Skipping malformed product document");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_skips_malformed_documents() {
        let documents = vec![
            json!({"_id": "ok-1", "price": 10}),
            json!({"_id": "bad", "price": "ten dollars"}),
            json!({"price": 5}),
            json!({"_id": "ok-2", "price": "12.50"}),
        ];

        let products = decode_products(documents);
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["ok-1", "ok-2"]);
    }
}
