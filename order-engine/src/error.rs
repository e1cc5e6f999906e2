//! Engine Error Types
//!
//! All failure paths are typed. Invariant checks in particular return an
//! error to the caller instead of logging and handing back a result that
//! failed its own cross-field checks.

use thiserror::Error;

/// Errors surfaced by the tax definition store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("tax store unavailable: {0}")]
    Unavailable(String),

    #[error("tax store query failed: {0}")]
    Query(String),
}

/// A cross-field check that failed at assembly time.
///
/// All amounts are in cents, the engine's internal unit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error(
        "subtotal decomposition failed: items {items_subtotal} + tax {flat_tax_total} != subtotal {subtotal_before_delivery}"
    )]
    SubtotalDecomposition {
        items_subtotal: i64,
        flat_tax_total: i64,
        subtotal_before_delivery: i64,
    },

    #[error(
        "total formula failed: subtotal {subtotal_before_delivery} + delivery {delivery_fee} - redeemed {loyalty_redeem_value} != total {total}"
    )]
    TotalFormula {
        subtotal_before_delivery: i64,
        delivery_fee: i64,
        loyalty_redeem_value: i64,
        total: i64,
    },

    #[error("negative total: {total}")]
    NegativeTotal { total: i64 },

    #[error("redemption exceeds cap: {points_used} points used, {allowed} allowed ({cap})")]
    RedemptionExceedsCap {
        points_used: i64,
        allowed: i64,
        cap: &'static str,
    },

    #[error(
        "redemption value {loyalty_redeem_value} exceeds subtotal {subtotal_before_redemption}"
    )]
    RedemptionExceedsSubtotal {
        loyalty_redeem_value: i64,
        subtotal_before_redemption: i64,
    },
}

/// Calculation errors
#[derive(Debug, Error)]
pub enum CalcError {
    // ========== Input Errors ==========
    #[error("validation failed: {0}")]
    Validation(String),

    // ========== Cross-field Errors ==========
    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),

    // ========== System Errors ==========
    #[error("tax store error: {0}")]
    Store(#[from] StoreError),
}
