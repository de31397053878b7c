//! Keyed access to the shared state store.

use crate::error::TraceResult;
use trazarroz_state::StateStore;

/// Composes the state key for a record.
///
/// Keys are formed as `PREFIX_id`; the underscore-joined composite is the
/// only namespace enforcement - there is no separate index.
pub fn state_key(prefix: &str, id: &str) -> String {
    format!("{prefix}_{id}")
}

/// Keyed accessor over an injected state store.
///
/// A thin convenience layer that owns the `PREFIX_id` key discipline. All
/// calls go straight through to the store; errors propagate unchanged. The
/// accessor performs no concurrency control: the platform serializes whole
/// invocations, which is what makes the exists-then-put pattern in the
/// collection façade safe.
pub struct StateAccessor<'a> {
    store: &'a dyn StateStore,
}

impl<'a> StateAccessor<'a> {
    /// Creates an accessor over the given store.
    pub fn new(store: &'a dyn StateStore) -> Self {
        Self { store }
    }

    /// Checks whether a record exists under `PREFIX_id`.
    pub fn exists(&self, prefix: &str, id: &str) -> TraceResult<bool> {
        Ok(self.store.get(&state_key(prefix, id))?.is_some())
    }

    /// Reads the current bytes under `PREFIX_id`.
    pub fn get(&self, prefix: &str, id: &str) -> TraceResult<Option<Vec<u8>>> {
        Ok(self.store.get(&state_key(prefix, id))?)
    }

    /// Writes `value` under `PREFIX_id`, overwriting any previous value.
    pub fn put(&self, prefix: &str, id: &str, value: &[u8]) -> TraceResult<()> {
        self.store.put(&state_key(prefix, id), value)?;
        Ok(())
    }

    /// Removes the current-state entry under `PREFIX_id`.
    pub fn delete(&self, prefix: &str, id: &str) -> TraceResult<()> {
        self.store.delete(&state_key(prefix, id))?;
        Ok(())
    }
}
