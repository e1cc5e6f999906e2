//! Tax Definition Registry
//!
//! Versioned read-through cache over the injected tax definition store.
//! Admin writes invalidate the whole cache; readers repopulate on miss.
//! Readers during an invalidation may observe either generation; the
//! window is accepted as eventual consistency and not locked against.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::StoreError;
use crate::money::to_cents;
use crate::store::TaxDefinitionStore;

/// Process-wide cache of current flat-tax amounts.
/// Entries map tax id to the per-unit amount in cents.
pub struct TaxRegistry {
    store: Arc<dyn TaxDefinitionStore>,
    entries: RwLock<HashMap<i64, i64>>,
    version: AtomicU64,
}

impl std::fmt::Debug for TaxRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaxRegistry")
            .field("entries_count", &self.entries.read().len())
            .field("version", &self.version.load(Ordering::SeqCst))
            .finish()
    }
}

impl TaxRegistry {
    pub fn new(store: Arc<dyn TaxDefinitionStore>) -> Self {
        Self {
            store,
            entries: RwLock::new(HashMap::new()),
            version: AtomicU64::new(0),
        }
    }

    /// Load every tax definition into the cache
    pub async fn warmup(&self) -> Result<(), StoreError> {
        let definitions = self.store.find_all().await?;
        let mut entries = self.entries.write();
        entries.clear();
        for def in &definitions {
            entries.insert(def.id, to_cents(def.amount));
        }
        tracing::debug!(count = definitions.len(), "tax cache warmed up");
        Ok(())
    }

    /// Current per-unit amount (cents) for a tax id.
    ///
    /// Read-through: a miss falls back to a fresh store read and populates
    /// the cache. A tax id with no definition returns `Ok(None)`; the
    /// caller decides whether to flag or fail.
    pub async fn get_current(&self, tax_id: i64) -> Result<Option<i64>, StoreError> {
        if let Some(amount) = self.entries.read().get(&tax_id) {
            return Ok(Some(*amount));
        }

        tracing::debug!(tax_id, "tax cache miss, reading store");
        match self.store.find_by_id(tax_id).await? {
            Some(def) => {
                let amount = to_cents(def.amount);
                self.entries.write().insert(tax_id, amount);
                Ok(Some(amount))
            }
            None => {
                tracing::warn!(tax_id, "tax definition not found, line will be untaxed");
                Ok(None)
            }
        }
    }

    /// Clear every cached entry and bump the cache generation
    pub fn invalidate(&self) {
        self.entries.write().clear();
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(version, "tax cache invalidated");
    }

    /// Monotonically increasing cache generation
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Number of cached entries
    pub fn cached_count(&self) -> usize {
        self.entries.read().len()
    }
}
