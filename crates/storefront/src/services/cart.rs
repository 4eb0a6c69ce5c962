//! Single-product add-to-cart.

use rigstore_core::{CoreError, Product};
use tracing::{info, instrument, warn};

use crate::error::Result;
use crate::source::CartSink;

/// Add one unit of `product` to the cart.
///
/// Out-of-stock products are rejected locally without contacting the sink.
///
/// # Errors
///
/// Returns `StoreError::Validation` for an out-of-stock product and
/// `StoreError::Fetch` if the sink fails.
#[instrument(skip(sink, product), fields(product_id = %product.id))]
pub async fn add_product_to_cart<S>(sink: &S, product: &Product) -> Result<()>
where
    S: CartSink + ?Sized,
{
    if !product.is_in_stock() {
        warn!(stock = product.stock, "Rejected add-to-cart for out-of-stock product");
        return Err(CoreError::OutOfStock(product.id.clone()).into());
    }
    sink.add_to_cart(&product.id, 1).await?;
    info!("Product added to cart");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rigstore_core::ProductId;
    use rust_decimal::Decimal;

    use super::*;
    use crate::api::ApiError;
    use crate::error::StoreError;

    #[derive(Default)]
    struct RecordingSink {
        calls: Mutex<Vec<(ProductId, u32)>>,
    }

    #[async_trait]
    impl CartSink for RecordingSink {
        async fn add_to_cart(&self, product_id: &ProductId, quantity: u32) -> std::result::Result<(), ApiError> {
            self.calls.lock().unwrap().push((product_id.clone(), quantity));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_out_of_stock_is_rejected_locally() {
        let sink = RecordingSink::default();
        let product = Product::new("gpu", Decimal::from(500));

        let err = add_product_to_cart(&sink, &product).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(CoreError::OutOfStock(_))));
        assert!(sink.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_in_stock_adds_one_unit() {
        let sink = RecordingSink::default();
        let mut product = Product::new("gpu", Decimal::from(500));
        product.stock = 3;

        add_product_to_cart(&sink, &product).await.unwrap();
        assert_eq!(*sink.calls.lock().unwrap(), vec![(ProductId::new("gpu"), 1)]);
    }
}
