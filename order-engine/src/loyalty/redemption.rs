//! Redemption Resolution
//!
//! Resolves a requested point redemption against the available balance and
//! two caps: an optional percentage-of-subtotal limit and the absolute
//! subtotal limit. The resolved value can never exceed the subtotal, so
//! redemption alone can never produce a negative total.

use rust_decimal::prelude::*;

use crate::money::to_decimal;

/// Resolved redemption, amounts in cents.
///
/// Carries the computed caps alongside the outcome so assembly-time checks
/// can verify the bound without recomputing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedemptionOutcome {
    /// Points actually redeemed
    pub points_used: i64,
    /// Currency value of the redeemed points, in cents
    pub redeem_value: i64,
    /// Point cap from the percentage limit, when one is configured
    pub max_by_percent: Option<i64>,
    /// Point cap from the subtotal itself
    pub max_by_subtotal: i64,
}

impl RedemptionOutcome {
    /// No redemption
    pub fn none() -> Self {
        Self {
            points_used: 0,
            redeem_value: 0,
            max_by_percent: None,
            max_by_subtotal: 0,
        }
    }
}

/// Resolve a redemption request.
///
/// Steps:
/// 1. points = min(requested, available)
/// 2. with a percentage cap: points = min(points, floor(floor(subtotal x
///    pct / 100) / value_per_point))
/// 3. points = max(0, min(points, floor(subtotal / value_per_point)))
/// 4. redeem_value = round(points x value_per_point), half-up
pub fn resolve_redemption(
    requested: i64,
    available: i64,
    redeem_value_per_point: f64,
    max_redeem_percent: Option<f64>,
    subtotal_before_redemption: i64,
) -> RedemptionOutcome {
    // Value of one point in cents (may be fractional, e.g. half a cent)
    let value_per_point = to_decimal(redeem_value_per_point) * Decimal::ONE_HUNDRED;

    if requested <= 0
        || available <= 0
        || value_per_point <= Decimal::ZERO
        || subtotal_before_redemption <= 0
    {
        return RedemptionOutcome::none();
    }

    let subtotal = Decimal::from(subtotal_before_redemption);
    let mut points = requested.min(available);

    let max_by_percent = max_redeem_percent.map(|pct| {
        let cap_cents = (subtotal * to_decimal(pct) / Decimal::ONE_HUNDRED).floor();
        (cap_cents / value_per_point)
            .floor()
            .to_i64()
            .unwrap_or_default()
    });
    if let Some(cap) = max_by_percent {
        points = points.min(cap);
    }

    let max_by_subtotal = (subtotal / value_per_point)
        .floor()
        .to_i64()
        .unwrap_or_default();
    points = points.min(max_by_subtotal).max(0);

    let redeem_value = (Decimal::from(points) * value_per_point)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default();

    RedemptionOutcome {
        points_used: points,
        redeem_value,
        max_by_percent,
        max_by_subtotal,
    }
}
