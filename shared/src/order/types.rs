//! Shared types for order calculation inputs and breakdown lines

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Order Status
// ============================================================================

/// Order status
///
/// `Completed` is the finalized state: the only status under which flat-tax
/// amounts stored on the order record may be trusted. Every other status
/// recomputes tax from the current definitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// New cart, not yet submitted
    #[default]
    Draft,
    /// Submitted, not yet finalized
    Active,
    /// Finalized and paid
    Completed,
    /// Cancelled
    Void,
}

// ============================================================================
// Input Types
// ============================================================================

/// A single cart item as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderInputItem {
    /// Product name
    pub name: String,
    /// Quantity
    pub quantity: i32,
    /// Unit price per pricing tier (tier 1-5, decimal currency)
    pub tier_prices: HashMap<u8, f64>,
    /// Category label (used for loyalty eligibility)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whether this item is subject to flat excise tax
    #[serde(default)]
    pub has_flat_tax: bool,
    /// Referenced tax definition, resolved through the registry on live orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_tax_id: Option<i64>,
    /// Per-unit tax amount carried on a persisted order record; trusted only
    /// when the order is completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_tax_per_unit: Option<f64>,
    /// Receipt label for the tax line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_tax_label: Option<String>,
}

/// Calculation request: cart items plus delivery and redemption terms.
/// Constructed per request, never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderInput {
    /// Items in cart order
    pub items: Vec<OrderInputItem>,
    /// Whether the order is delivered
    #[serde(default)]
    pub is_delivery: bool,
    /// Delivery fee (decimal currency), only meaningful with `is_delivery`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<f64>,
    /// Loyalty points the customer asked to redeem
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redeem_points: Option<i64>,
    /// Status of the order being (re)calculated; new carts are drafts
    #[serde(default)]
    pub status: OrderStatus,
}

// ============================================================================
// Breakdown Lines
// ============================================================================

/// One line of a computed order breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalcLine {
    /// Priced cart item
    Item {
        name: String,
        quantity: i32,
        /// Per-unit price for the customer's tier (decimal currency)
        unit_price: f64,
        /// unit_price x quantity (decimal currency)
        line_total: f64,
    },
    /// Flat excise tax for one item
    FlatTax { label: String, amount: f64 },
    /// Delivery fee
    Delivery { amount: f64 },
    /// Loyalty redemption credit
    LoyaltyRedeem { points_used: i64, amount: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_draft() {
        assert_eq!(OrderStatus::default(), OrderStatus::Draft);
    }

    #[test]
    fn calc_line_serializes_with_type_tag() {
        let line = CalcLine::FlatTax {
            label: "Tobacco Tax".to_string(),
            amount: 6.0,
        };
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains(r#""type":"FLAT_TAX""#));
    }

    #[test]
    fn order_input_defaults_apply_on_deserialize() {
        let input: OrderInput = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(!input.is_delivery);
        assert_eq!(input.status, OrderStatus::Draft);
        assert!(input.redeem_points.is_none());
    }
}
