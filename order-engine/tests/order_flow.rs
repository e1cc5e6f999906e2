//! Full calculation flow against an in-memory tax store
//!
//! Exercises the engine the way a checkout route handler would: warm the
//! registry, calculate a mixed cart, push an admin tax update through the
//! invalidation controller, and recalculate.

use std::collections::HashMap;
use std::sync::Arc;

use order_engine::{
    CacheInvalidationController, EngineConfig, InMemoryTaxStore, OrderCalculator, TaxRegistry,
};
use shared::models::{Customer, LoyaltyProfile, TaxDefinition};
use shared::order::{CalcLine, OrderInput, OrderInputItem, OrderStatus};

fn tobacco_item(name: &str, quantity: i32, price: f64, tax_id: i64) -> OrderInputItem {
    OrderInputItem {
        name: name.to_string(),
        quantity,
        tier_prices: HashMap::from([(1, price), (2, price * 0.9)]),
        category: Some("tobacco".to_string()),
        has_flat_tax: true,
        flat_tax_id: Some(tax_id),
        flat_tax_per_unit: None,
        flat_tax_label: Some("Tobacco Tax".to_string()),
    }
}

fn accessory_item(name: &str, quantity: i32, price: f64) -> OrderInputItem {
    OrderInputItem {
        name: name.to_string(),
        quantity,
        tier_prices: HashMap::from([(1, price), (2, price * 0.9)]),
        category: Some("accessories".to_string()),
        has_flat_tax: false,
        flat_tax_id: None,
        flat_tax_per_unit: None,
        flat_tax_label: None,
    }
}

#[tokio::test]
async fn checkout_then_admin_tax_update_then_recalculate() {
    let store = Arc::new(InMemoryTaxStore::new());
    store.upsert(TaxDefinition {
        id: 5,
        name: "Little Cigar Tax".to_string(),
        amount: 0.60,
        updated_at: 1_700_000_000_000,
    });

    let registry = Arc::new(TaxRegistry::new(store.clone()));
    registry.warmup().await.unwrap();
    let controller = CacheInvalidationController::new(registry.clone());
    let calculator = OrderCalculator::new(registry.clone(), EngineConfig::default());

    let input = OrderInput {
        items: vec![
            tobacco_item("Cigarillos 20ct", 10, 4.0, 5),
            accessory_item("Lighters", 5, 2.0),
        ],
        is_delivery: true,
        delivery_fee: Some(15.0),
        redeem_points: Some(500),
        status: OrderStatus::Draft,
    };

    let customer = Customer {
        tier: 1,
        has_flat_tax: true,
        loyalty: LoyaltyProfile {
            available_points: 2_000,
            earn_rate_per_dollar: 0.02,
            redeem_value_per_point: 0.01,
            max_redeem_percent: Some(50.0),
        },
    };

    // First calculation: $40 + $10 items, $6 tax, $15 delivery, $5 redeemed
    let result = calculator.calculate(&input, &customer).await.unwrap();
    assert_eq!(result.items_subtotal, 50.0);
    assert_eq!(result.flat_tax_total, 6.0);
    assert_eq!(result.subtotal_before_delivery, 56.0);
    assert_eq!(result.delivery_fee, 15.0);
    assert_eq!(result.subtotal_before_redemption, 71.0);
    assert_eq!(result.points_redeemed, 500);
    assert_eq!(result.loyalty_redeem_value, 5.0);
    assert_eq!(result.total, 66.0);

    // Tobacco never earns: only the $10.00 of lighters is eligible
    assert_eq!(result.loyalty_eligible_subtotal, 10.0);
    assert_eq!(result.points_earned, 0);
    assert!(result.missing_tax_ids.is_empty());

    // Admin raises the tax; the controller busts the cache
    store.upsert(TaxDefinition {
        id: 5,
        name: "Little Cigar Tax".to_string(),
        amount: 0.65,
        updated_at: 1_700_000_100_000,
    });
    controller.on_tax_definition_written(5);
    assert_eq!(registry.version(), 1);

    // The draft recalculates against the new amount, never the stale one
    let result = calculator.calculate(&input, &customer).await.unwrap();
    assert_eq!(result.flat_tax_total, 6.5);
    assert_eq!(result.total, 66.5);

    // A completed order keeps the amount it was sold with
    let mut finalized = input.clone();
    finalized.status = OrderStatus::Completed;
    for item in &mut finalized.items {
        if item.has_flat_tax {
            item.flat_tax_per_unit = Some(0.60);
        }
    }
    let result = calculator.calculate(&finalized, &customer).await.unwrap();
    assert_eq!(result.flat_tax_total, 6.0);
}

#[tokio::test]
async fn breakdown_lines_serialize_for_the_route_layer() {
    let registry = Arc::new(TaxRegistry::new(Arc::new(InMemoryTaxStore::new())));
    let calculator = OrderCalculator::new(registry, EngineConfig::default());

    let input = OrderInput {
        items: vec![accessory_item("Lighters", 2, 2.0)],
        is_delivery: false,
        delivery_fee: None,
        redeem_points: None,
        status: OrderStatus::Draft,
    };
    let customer = Customer {
        tier: 2,
        has_flat_tax: false,
        loyalty: LoyaltyProfile::inactive(),
    };

    let result = calculator.calculate(&input, &customer).await.unwrap();

    // Tier 2 pays the discounted price
    assert_eq!(result.items_subtotal, 3.6);
    assert!(matches!(
        result.lines[0],
        CalcLine::Item { quantity: 2, .. }
    ));

    let json = serde_json::to_string(&result).unwrap();
    let back: shared::order::OrderResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
