//! Money conversion helpers
//!
//! All calculation happens in integer minor units (i64 cents). Wire-facing
//! values are decimal currency (f64); conversion goes through `Decimal`
//! with half-up rounding so the boundary never inherits float drift.

use rust_decimal::prelude::*;

/// Rounding for wire-facing monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price, fee, or per-unit tax amount (1,000,000.00)
pub const MAX_AMOUNT: f64 = 1_000_000.0;
/// Maximum allowed quantity per item
pub const MAX_QUANTITY: i32 = 9999;

/// Convert f64 to Decimal for calculation
///
/// Inputs are pre-validated as finite at the boundary. If NaN/Infinity
/// somehow reaches here, logs an error and returns ZERO rather than
/// corrupting a monetary result.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "non-finite f64 in monetary conversion, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert a decimal currency amount to integer cents, rounding half-up
#[inline]
pub fn to_cents(value: f64) -> i64 {
    (to_decimal(value) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

/// Convert integer cents back to decimal currency for the boundary.
/// Exact: cents / 100 always has at most 2 decimal places.
#[inline]
pub fn cents_to_f64(cents: i64) -> f64 {
    (Decimal::from(cents) / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total in cents for a unit price and quantity, rounded half-up once
/// on the full product so sub-cent unit prices do not drop value per unit.
#[inline]
pub fn line_total_cents(unit_price: f64, quantity: i32) -> i64 {
    (to_decimal(unit_price) * Decimal::from(quantity) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cents_exact() {
        assert_eq!(to_cents(10.0), 1000);
        assert_eq!(to_cents(0.6), 60);
        assert_eq!(to_cents(0.01), 1);
        assert_eq!(to_cents(0.0), 0);
    }

    #[test]
    fn test_to_cents_rounds_half_up() {
        assert_eq!(to_cents(10.005), 1001);
        assert_eq!(to_cents(10.004), 1000);
    }

    #[test]
    fn test_to_cents_float_noise() {
        // 0.1 + 0.2 style representation noise must not leak into cents
        assert_eq!(to_cents(0.1 + 0.2), 30);
        assert_eq!(to_cents(29.99), 2999);
    }

    #[test]
    fn test_cents_round_trip() {
        for cents in [0, 1, 99, 100, 1099, 123456789] {
            assert_eq!(to_cents(cents_to_f64(cents)), cents);
        }
    }

    #[test]
    fn test_cents_to_f64_negative() {
        assert_eq!(cents_to_f64(-550), -5.5);
    }

    #[test]
    fn test_line_total_two_decimal_prices() {
        // 2dp unit prices: line total equals unit cents times quantity
        assert_eq!(line_total_cents(10.0, 2), 2000);
        assert_eq!(line_total_cents(0.6, 10), 600);
        assert_eq!(line_total_cents(2.99, 3), 897);
    }

    #[test]
    fn test_line_total_sub_cent_price_rounds_once() {
        // 0.333 x 3 = 0.999 -> 100 cents, not 3 x round(33.3)
        assert_eq!(line_total_cents(0.333, 3), 100);
    }

    #[test]
    fn test_non_finite_defaults_to_zero() {
        assert_eq!(to_cents(f64::NAN), 0);
        assert_eq!(to_cents(f64::INFINITY), 0);
    }
}
