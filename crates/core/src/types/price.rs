//! Price helpers using decimal arithmetic.
//!
//! Prices travel as plain [`Decimal`] amounts in the store currency. The API
//! only ever deals in a single currency, so there is no currency tag here.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Format an amount for display (e.g., `$1299.00`).
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

/// Percentage saved when paying `effective` instead of `price`, rounded to the
/// nearest whole percent with halves rounding up.
///
/// A zero or negative base price yields 0 instead of dividing by zero.
///
/// # Example
///
/// ```rust
/// # use rigstore_core::savings_percent;
/// # use rust_decimal::Decimal;
/// assert_eq!(savings_percent(Decimal::from(200), Decimal::from(150)), 25);
/// assert_eq!(savings_percent(Decimal::ZERO, Decimal::ZERO), 0);
/// ```
#[must_use]
pub fn savings_percent(price: Decimal, effective: Decimal) -> i64 {
    if price <= Decimal::ZERO {
        return 0;
    }

    let Some(ratio) = (price - effective).checked_div(price) else {
        return 0;
    };

    // floor(x + 0.5) so that 12.5 -> 13 and -12.5 -> -12
    (ratio * Decimal::ONE_HUNDRED + Decimal::new(5, 1))
        .floor()
        .to_i64()
        .unwrap_or(0)
}
