//! Tier Price Resolver

use shared::order::OrderInputItem;

use crate::money::{line_total_cents, to_cents};

/// A cart item priced for one tier, amounts in cents
#[derive(Debug, Clone)]
pub struct PricedItem {
    pub name: String,
    pub quantity: i32,
    /// Per-unit price in cents
    pub unit_price: i64,
    /// Line total in cents
    pub line_total: i64,
    /// Category label, lowercased for matching
    pub category: Option<String>,
}

/// Resolve the per-unit price of an item for a pricing tier.
///
/// A missing tier entry resolves to 0 rather than an error; the gap is
/// logged so catalog holes show up in operations tooling.
pub fn resolve_unit_price(item: &OrderInputItem, tier: u8) -> f64 {
    match item.tier_prices.get(&tier) {
        Some(price) => *price,
        None => {
            tracing::warn!(
                item = %item.name,
                tier,
                "no price configured for tier, defaulting to 0"
            );
            0.0
        }
    }
}

/// Price every item for the tier, producing the item lines in cart order
pub fn build_item_lines(items: &[OrderInputItem], tier: u8) -> Vec<PricedItem> {
    items
        .iter()
        .map(|item| {
            let unit_price = resolve_unit_price(item, tier);
            PricedItem {
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: to_cents(unit_price),
                line_total: line_total_cents(unit_price, item.quantity),
                category: item.category.as_deref().map(str::to_ascii_lowercase),
            }
        })
        .collect()
}
