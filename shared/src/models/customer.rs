//! Customer Profile Model

use serde::{Deserialize, Serialize};

/// Wholesale customer profile, supplied by the upstream account service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    /// Pricing tier (1-5)
    pub tier: u8,
    /// Whether flat excise taxes apply to this customer
    pub has_flat_tax: bool,
    /// Loyalty program state
    pub loyalty: LoyaltyProfile,
}

/// Loyalty program state for one customer
///
/// The balance observed here is the balance at calculation time; the
/// order-commit transaction re-validates it before actually deducting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoyaltyProfile {
    /// Redeemable point balance
    pub available_points: i64,
    /// Points earned per eligible dollar spent (fractional rate, e.g. 0.02)
    pub earn_rate_per_dollar: f64,
    /// Redemption value of one point in currency units (e.g. 0.01)
    pub redeem_value_per_point: f64,
    /// Cap on redemption as a percentage of the order subtotal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_redeem_percent: Option<f64>,
}

impl LoyaltyProfile {
    /// Profile with no balance and no earning, for customers outside the
    /// loyalty program
    pub fn inactive() -> Self {
        Self {
            available_points: 0,
            earn_rate_per_dollar: 0.0,
            redeem_value_per_point: 0.0,
            max_redeem_percent: None,
        }
    }
}
