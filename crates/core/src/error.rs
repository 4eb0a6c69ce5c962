//! Validation errors raised by the core.
//!
//! Filtering, sorting and pagination never fail. The only fallible entry
//! points are parsers for user input and the build-commit precondition.

use thiserror::Error;

use crate::build::Slot;
use crate::types::ProductId;

/// Errors that can occur when validating input for core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A price-range bound is not a number.
    #[error("invalid {bound} price: {value:?}")]
    InvalidPriceBound {
        /// Which bound (`min` or `max`).
        bound: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A sort option string is not recognised.
    #[error("unknown sort option: {0}")]
    UnknownSort(String),

    /// A build slot name is not recognised.
    #[error("unknown build slot: {0}")]
    UnknownSlot(String),

    /// The build is missing one or more required slots.
    #[error("{} required to complete your build", format_missing(.missing))]
    IncompleteBuild {
        /// Required slots that are empty.
        missing: Vec<Slot>,
    },

    /// The product cannot be added to a cart.
    #[error("product {0} is out of stock")]
    OutOfStock(ProductId),
}

fn format_missing(missing: &[Slot]) -> String {
    let names: Vec<&str> = missing.iter().map(Slot::label).collect();
    match names.as_slice() {
        [] => "nothing is".to_string(),
        [one] => format!("{one} is"),
        [init @ .., last] => format!("{} and {last} are", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_build_message() {
        let err = CoreError::IncompleteBuild {
            missing: vec![Slot::Processor, Slot::Motherboard],
        };
        assert_eq!(
            err.to_string(),
            "Processor and Motherboard are required to complete your build"
        );

        let err = CoreError::IncompleteBuild {
            missing: vec![Slot::Motherboard],
        };
        assert_eq!(err.to_string(), "Motherboard is required to complete your build");
    }

    #[test]
    fn test_invalid_price_bound_message() {
        let err = CoreError::InvalidPriceBound {
            bound: "min",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid min price: \"abc\"");
    }
}
