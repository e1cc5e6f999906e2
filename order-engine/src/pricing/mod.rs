//! Tier Pricing
//!
//! Resolves per-unit prices for a customer's pricing tier and builds the
//! priced item lines the rest of the calculation works from.

pub mod resolver;

pub use resolver::{PricedItem, build_item_lines, resolve_unit_price};
