//! Point Accrual
//!
//! Points accrue on the eligible subtotal: the sum of item line totals for
//! every item outside the excluded categories. Excluded items (tobacco by
//! default) never earn, regardless of tier or tax status.

use rust_decimal::prelude::*;
use std::collections::HashSet;

use crate::money::to_decimal;
use crate::pricing::PricedItem;

/// Sum of line totals (cents) for items whose category is not excluded.
/// Items without a category always count.
pub fn eligible_subtotal(items: &[PricedItem], excluded_categories: &HashSet<String>) -> i64 {
    items
        .iter()
        .filter(|item| {
            item.category
                .as_ref()
                .is_none_or(|category| !excluded_categories.contains(category))
        })
        .map(|item| item.line_total)
        .sum()
}

/// Points earned on an eligible subtotal: floor(dollars x rate)
pub fn points_earned(eligible_cents: i64, earn_rate_per_dollar: f64) -> i64 {
    if eligible_cents <= 0 || earn_rate_per_dollar <= 0.0 {
        return 0;
    }

    let dollars = Decimal::from(eligible_cents) / Decimal::ONE_HUNDRED;
    (dollars * to_decimal(earn_rate_per_dollar))
        .floor()
        .to_i64()
        .unwrap_or_default()
}
