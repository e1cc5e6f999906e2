//! Order Total Calculator
//!
//! Assembles item lines, flat-tax lines, an optional delivery line, and an
//! optional redemption line, in that fixed order, then derives the order
//! totals. Every cross-field check runs before the result leaves the
//! engine; a failed check is returned as a typed error, never handed back
//! inside a result.
//!
//! Calculation steps:
//! 1. Validate the input and customer profile
//! 2. Price items for the customer's tier
//! 3. Resolve flat-tax lines through the registry
//! 4. Append the delivery fee
//! 5. Compute loyalty accrual (informational) and resolve redemption
//! 6. Verify invariants and convert cents to the boundary type

use std::sync::Arc;

use shared::models::Customer;
use shared::order::{CalcLine, OrderInput, OrderResult};

use crate::config::EngineConfig;
use crate::error::{CalcError, InvariantViolation};
use crate::loyalty::{self, RedemptionOutcome};
use crate::money::{cents_to_f64, to_cents};
use crate::pricing::build_item_lines;
use crate::tax::{TaxRegistry, calculate_flat_tax};
use crate::validation::{validate_customer, validate_order_input};

/// The calculation engine's entry point.
///
/// Stateless per call; the registry is the only shared structure, so one
/// calculator can serve every request-handling task concurrently.
#[derive(Clone)]
pub struct OrderCalculator {
    registry: Arc<TaxRegistry>,
    config: EngineConfig,
}

impl std::fmt::Debug for OrderCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderCalculator")
            .field("registry", &self.registry)
            .finish()
    }
}

/// Cents-exact totals, verified before conversion at the boundary
#[derive(Debug, Clone, Copy)]
struct Totals {
    items_subtotal: i64,
    flat_tax_total: i64,
    subtotal_before_delivery: i64,
    delivery_fee: i64,
    subtotal_before_redemption: i64,
    total: i64,
}

impl OrderCalculator {
    pub fn new(registry: Arc<TaxRegistry>, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    /// Calculate the full breakdown for one order.
    ///
    /// Pure with respect to order state: the result depends only on the
    /// inputs and the current tax definitions. Nothing is persisted and no
    /// balance is mutated here; committing the order is the caller's
    /// transaction, which must re-validate the loyalty balance it deducts.
    pub async fn calculate(
        &self,
        input: &OrderInput,
        customer: &Customer,
    ) -> Result<OrderResult, CalcError> {
        validate_order_input(input)?;
        validate_customer(customer)?;

        // Item lines priced for the customer's tier
        let priced = build_item_lines(&input.items, customer.tier);
        let items_subtotal: i64 = priced.iter().map(|item| item.line_total).sum();

        // Flat-tax lines from current definitions
        let tax = calculate_flat_tax(
            &input.items,
            customer,
            input.status,
            &self.registry,
            &self.config.default_flat_tax_label,
        )
        .await?;
        let flat_tax_total: i64 = tax.lines.iter().map(|line| line.amount).sum();

        let subtotal_before_delivery = items_subtotal + flat_tax_total;

        let delivery_fee = if input.is_delivery {
            to_cents(input.delivery_fee.unwrap_or(0.0))
        } else {
            0
        };
        let subtotal_before_redemption = subtotal_before_delivery + delivery_fee;

        // Accrual is informational here; the commit transaction credits it
        let eligible =
            loyalty::eligible_subtotal(&priced, &self.config.loyalty_excluded_categories);
        let points_earned = loyalty::points_earned(eligible, customer.loyalty.earn_rate_per_dollar);

        let requested = input.redeem_points.unwrap_or(0);
        let redemption = loyalty::resolve_redemption(
            requested,
            customer.loyalty.available_points,
            customer.loyalty.redeem_value_per_point,
            customer.loyalty.max_redeem_percent,
            subtotal_before_redemption,
        );

        let totals = Totals {
            items_subtotal,
            flat_tax_total,
            subtotal_before_delivery,
            delivery_fee,
            subtotal_before_redemption,
            total: subtotal_before_redemption - redemption.redeem_value,
        };

        verify_invariants(
            &totals,
            &redemption,
            requested,
            customer.loyalty.available_points,
        )?;

        // Lines in fixed order: items, flat tax, delivery, redemption
        let mut lines = Vec::with_capacity(priced.len() + tax.lines.len() + 2);
        for item in &priced {
            lines.push(CalcLine::Item {
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: cents_to_f64(item.unit_price),
                line_total: cents_to_f64(item.line_total),
            });
        }
        for line in &tax.lines {
            lines.push(CalcLine::FlatTax {
                label: line.label.clone(),
                amount: cents_to_f64(line.amount),
            });
        }
        if input.is_delivery {
            lines.push(CalcLine::Delivery {
                amount: cents_to_f64(delivery_fee),
            });
        }
        if redemption.points_used > 0 {
            lines.push(CalcLine::LoyaltyRedeem {
                points_used: redemption.points_used,
                amount: cents_to_f64(redemption.redeem_value),
            });
        }

        Ok(OrderResult {
            lines,
            items_subtotal: cents_to_f64(totals.items_subtotal),
            flat_tax_total: cents_to_f64(totals.flat_tax_total),
            subtotal_before_delivery: cents_to_f64(totals.subtotal_before_delivery),
            delivery_fee: cents_to_f64(totals.delivery_fee),
            subtotal_before_redemption: cents_to_f64(totals.subtotal_before_redemption),
            loyalty_eligible_subtotal: cents_to_f64(eligible),
            points_earned,
            points_redeemed: redemption.points_used,
            loyalty_redeem_value: cents_to_f64(redemption.redeem_value),
            total: cents_to_f64(totals.total),
            missing_tax_ids: tax.missing_tax_ids,
        })
    }
}

/// Cross-field checks every result must pass before leaving the engine
fn verify_invariants(
    totals: &Totals,
    redemption: &RedemptionOutcome,
    requested: i64,
    available: i64,
) -> Result<(), InvariantViolation> {
    if totals.subtotal_before_delivery != totals.items_subtotal + totals.flat_tax_total {
        return Err(InvariantViolation::SubtotalDecomposition {
            items_subtotal: totals.items_subtotal,
            flat_tax_total: totals.flat_tax_total,
            subtotal_before_delivery: totals.subtotal_before_delivery,
        });
    }

    if totals.total
        != totals.subtotal_before_delivery + totals.delivery_fee - redemption.redeem_value
    {
        return Err(InvariantViolation::TotalFormula {
            subtotal_before_delivery: totals.subtotal_before_delivery,
            delivery_fee: totals.delivery_fee,
            loyalty_redeem_value: redemption.redeem_value,
            total: totals.total,
        });
    }

    if totals.total < 0 {
        return Err(InvariantViolation::NegativeTotal {
            total: totals.total,
        });
    }

    if redemption.points_used > 0 {
        let caps: [(&'static str, i64); 2] = [("requested", requested), ("available", available)];
        for (cap, allowed) in caps {
            if redemption.points_used > allowed {
                return Err(InvariantViolation::RedemptionExceedsCap {
                    points_used: redemption.points_used,
                    allowed,
                    cap,
                });
            }
        }
        if let Some(allowed) = redemption.max_by_percent {
            if redemption.points_used > allowed {
                return Err(InvariantViolation::RedemptionExceedsCap {
                    points_used: redemption.points_used,
                    allowed,
                    cap: "percent",
                });
            }
        }
        if redemption.points_used > redemption.max_by_subtotal {
            return Err(InvariantViolation::RedemptionExceedsCap {
                points_used: redemption.points_used,
                allowed: redemption.max_by_subtotal,
                cap: "subtotal",
            });
        }
    }

    if redemption.redeem_value > totals.subtotal_before_redemption {
        return Err(InvariantViolation::RedemptionExceedsSubtotal {
            loyalty_redeem_value: redemption.redeem_value,
            subtotal_before_redemption: totals.subtotal_before_redemption,
        });
    }

    Ok(())
}
