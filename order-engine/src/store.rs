//! Tax Definition Store Interface
//!
//! The engine never imports persistence directly; callers inject an
//! implementation of this trait at construction time. Production wires in
//! the database-backed store, tests and tooling use [`InMemoryTaxStore`].

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::StoreError;
use shared::models::TaxDefinition;

/// Read interface over the admin-managed tax definition store
#[async_trait]
pub trait TaxDefinitionStore: Send + Sync {
    /// Look up a single tax definition by id
    async fn find_by_id(&self, id: i64) -> Result<Option<TaxDefinition>, StoreError>;

    /// Fetch all tax definitions
    async fn find_all(&self) -> Result<Vec<TaxDefinition>, StoreError>;
}

/// In-memory tax definition store
///
/// Backs tests and local tooling; also the reference implementation for
/// the admin write path (writes here must be followed by
/// `CacheInvalidationController::on_tax_definition_written`).
#[derive(Default)]
pub struct InMemoryTaxStore {
    definitions: RwLock<HashMap<i64, TaxDefinition>>,
}

impl InMemoryTaxStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a definition
    pub fn upsert(&self, definition: TaxDefinition) {
        self.definitions.write().insert(definition.id, definition);
    }

    /// Remove a definition
    pub fn remove(&self, id: i64) -> Option<TaxDefinition> {
        self.definitions.write().remove(&id)
    }
}

impl std::fmt::Debug for InMemoryTaxStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTaxStore")
            .field("definitions_count", &self.definitions.read().len())
            .finish()
    }
}

#[async_trait]
impl TaxDefinitionStore for InMemoryTaxStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<TaxDefinition>, StoreError> {
        Ok(self.definitions.read().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<TaxDefinition>, StoreError> {
        Ok(self.definitions.read().values().cloned().collect())
    }
}
