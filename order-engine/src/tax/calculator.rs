//! Flat Tax Calculator
//!
//! Emits zero or more fixed per-unit tax lines for an order. A line is
//! produced only when both the customer and the item are tax-flagged and
//! the resolved per-unit amount is positive.

use shared::models::Customer;
use shared::order::{OrderInputItem, OrderStatus};

use super::invalidation::must_recompute_flat_tax;
use super::registry::TaxRegistry;
use crate::error::StoreError;
use crate::money::line_total_cents;

/// One flat-tax line, amount in cents
#[derive(Debug, Clone)]
pub struct FlatTaxLine {
    pub label: String,
    pub amount: i64,
}

/// Result of flat-tax calculation for an order
#[derive(Debug, Clone, Default)]
pub struct FlatTaxOutcome {
    pub lines: Vec<FlatTaxLine>,
    /// Tax ids referenced by items but missing from the store
    pub missing_tax_ids: Vec<i64>,
}

/// Calculate flat-tax lines for all items of an order.
///
/// Per-unit resolution depends on the order status:
/// - not finalized: the current registry amount via `flat_tax_id`; any
///   stored `flat_tax_per_unit` is ignored so a stale amount can never
///   resurface on a live order
/// - finalized (completed): the stored `flat_tax_per_unit`, preserving the
///   amounts the order was actually sold with
///
/// Items whose `flat_tax_id` has no definition produce no line and are
/// reported in `missing_tax_ids` for downstream audit.
pub async fn calculate_flat_tax(
    items: &[OrderInputItem],
    customer: &Customer,
    status: OrderStatus,
    registry: &TaxRegistry,
    default_label: &str,
) -> Result<FlatTaxOutcome, StoreError> {
    let mut outcome = FlatTaxOutcome::default();

    if !customer.has_flat_tax {
        return Ok(outcome);
    }

    for item in items {
        if !item.has_flat_tax {
            continue;
        }

        let amount = match resolve_line_amount(item, status, registry, &mut outcome).await? {
            Some(amount) if amount > 0 => amount,
            _ => continue,
        };

        let label = item
            .flat_tax_label
            .clone()
            .unwrap_or_else(|| default_label.to_string());

        outcome.lines.push(FlatTaxLine { label, amount });
    }

    Ok(outcome)
}

/// Resolve one item's tax line amount in cents, or None for no line
async fn resolve_line_amount(
    item: &OrderInputItem,
    status: OrderStatus,
    registry: &TaxRegistry,
    outcome: &mut FlatTaxOutcome,
) -> Result<Option<i64>, StoreError> {
    if must_recompute_flat_tax(status) {
        match item.flat_tax_id {
            Some(tax_id) => match registry.get_current(tax_id).await? {
                Some(per_unit) => Ok(Some(per_unit * item.quantity as i64)),
                None => {
                    outcome.missing_tax_ids.push(tax_id);
                    Ok(None)
                }
            },
            // No central definition: the item's own configured amount is
            // the source, not a stored copy of anything
            None => Ok(item
                .flat_tax_per_unit
                .map(|per_unit| line_total_cents(per_unit, item.quantity))),
        }
    } else {
        Ok(item
            .flat_tax_per_unit
            .map(|per_unit| line_total_cents(per_unit, item.quantity)))
    }
}
