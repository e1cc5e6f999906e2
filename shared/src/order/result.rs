//! Order calculation result
//!
//! The immutable breakdown returned to callers for display and persistence.
//! All monetary fields are decimal currency units; the engine computes them
//! in integer cents and converts exactly once, at this boundary.

use super::types::CalcLine;
use serde::{Deserialize, Serialize};

/// Computed order breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderResult {
    /// Breakdown lines in fixed order: items, flat tax, delivery, redemption
    pub lines: Vec<CalcLine>,
    /// Sum of item line totals
    pub items_subtotal: f64,
    /// Sum of flat-tax lines
    pub flat_tax_total: f64,
    /// items_subtotal + flat_tax_total
    pub subtotal_before_delivery: f64,
    /// Delivery fee (0 when not a delivery order)
    pub delivery_fee: f64,
    /// subtotal_before_delivery + delivery_fee
    pub subtotal_before_redemption: f64,
    /// Portion of the items subtotal that accrues loyalty points
    pub loyalty_eligible_subtotal: f64,
    /// Points this order will earn (informational, not yet credited)
    pub points_earned: i64,
    /// Points actually redeemed after caps
    pub points_redeemed: i64,
    /// Currency value of the redeemed points
    pub loyalty_redeem_value: f64,
    /// Final amount to pay
    pub total: f64,
    /// Tax ids referenced by items but missing from the store. The order
    /// went out untaxed for these; downstream auditing should review it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_tax_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_round_trips_through_json() {
        let result = OrderResult {
            lines: vec![CalcLine::Item {
                name: "Lighter".to_string(),
                quantity: 2,
                unit_price: 10.0,
                line_total: 20.0,
            }],
            items_subtotal: 20.0,
            flat_tax_total: 0.0,
            subtotal_before_delivery: 20.0,
            delivery_fee: 0.0,
            subtotal_before_redemption: 20.0,
            loyalty_eligible_subtotal: 20.0,
            points_earned: 0,
            points_redeemed: 0,
            loyalty_redeem_value: 0.0,
            total: 20.0,
            missing_tax_ids: vec![],
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: OrderResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
        // Empty audit field stays off the wire
        assert!(!json.contains("missing_tax_ids"));
    }
}
