//! Loyalty Engine
//!
//! Pure functions for point accrual and redemption resolution. Accrual is
//! informational (the commit transaction credits the points); redemption
//! is capped so it can never push an order total negative.

pub mod accrual;
pub mod redemption;

pub use accrual::{eligible_subtotal, points_earned};
pub use redemption::{RedemptionOutcome, resolve_redemption};
