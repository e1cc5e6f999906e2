//! Cache Invalidation
//!
//! Admin tax-definition writes bump the registry generation and clear the
//! cache so later calculations never see a stale amount. Also owns the
//! predicate deciding when stored flat-tax amounts may be trusted.

use std::sync::Arc;

use shared::order::OrderStatus;

use super::registry::TaxRegistry;

/// Bridges the admin tax write path to the registry cache
#[derive(Clone)]
pub struct CacheInvalidationController {
    registry: Arc<TaxRegistry>,
}

impl CacheInvalidationController {
    pub fn new(registry: Arc<TaxRegistry>) -> Self {
        Self { registry }
    }

    /// Called after any create, update, or delete of a tax definition
    pub fn on_tax_definition_written(&self, tax_id: i64) {
        tracing::debug!(tax_id, "tax definition written, clearing cache");
        self.registry.invalidate();
    }
}

/// Whether flat tax must be recomputed from current definitions.
///
/// Completed orders keep the amounts they were sold with; every other
/// status recomputes so a draft can never resurrect a stale amount.
pub fn must_recompute_flat_tax(status: OrderStatus) -> bool {
    !matches!(status, OrderStatus::Completed)
}
