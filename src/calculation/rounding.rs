//! Currency rounding.
//!
//! Every breakdown amount is rounded to cents with half-away-from-zero
//! rounding, so 0.005 becomes 0.01 and 0.015 becomes 0.02.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept on currency amounts.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents, midpoints away from zero.
///
/// # Examples
///
/// ```
/// use grant_forecast::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(1005, 3)).to_string(), "1.01");
/// assert_eq!(round_currency(Decimal::new(7, 0)).to_string(), "7.00");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}
