//! Saved plan history: newest first, capped, persisted as one unit.

use crate::kv::{keys, KvStore};
use anyhow::Result;
use salus_core::suggestion::Suggestion;

/// History cap; appending past this drops the oldest entries.
pub const MAX_SAVED_PLANS: usize = 10;

/// In-memory plan history backed by the key-value store.
///
/// Loaded once at open; every mutation rewrites the whole sequence under the
/// fixed plans key. Corrupt or missing stored data resets to an empty history
/// rather than propagating an error.
pub struct PlanStore {
    kv: KvStore,
    plans: Vec<Suggestion>,
}

impl PlanStore {
    pub fn open(kv: KvStore) -> Self {
        let plans = match kv.get::<Vec<Suggestion>>(keys::PLANS) {
            Ok(Some(plans)) => plans,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Saved plans unreadable, starting with empty history: {}", e);
                Vec::new()
            }
        };
        Self { kv, plans }
    }

    /// Current history, newest first.
    pub fn list(&self) -> &[Suggestion] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Insert at the front, truncate to [`MAX_SAVED_PLANS`], persist.
    pub fn append(&mut self, suggestion: Suggestion) -> Result<()> {
        self.plans.insert(0, suggestion);
        self.plans.truncate(MAX_SAVED_PLANS);
        self.persist()
    }

    /// Remove and return the entry at `index`, preserving the order of the
    /// rest, then persist.
    ///
    /// # Panics
    /// Panics if `index >= len()`. Callers only pass indices they obtained
    /// from [`list`](Self::list).
    pub fn delete(&mut self, index: usize) -> Result<Suggestion> {
        let removed = self.plans.remove(index);
        self.persist()?;
        Ok(removed)
    }

    fn persist(&self) -> Result<()> {
        self.kv.set(keys::PLANS, &self.plans)
    }
}
