//! Selector construction and query execution.
//!
//! Two query modes are supported for interoperability with different store
//! backends:
//! - **Rich selector queries**: a `{"selector": {...}}` document the store
//!   evaluates against all current-state documents
//! - **Prefix/range scans**: the fallback for stores without selector
//!   support, scanning the half-open key range `[PREFIX_, PREFIX_~)`
//!
//! Both modes drain the result iterator into an ordered sequence, parsing
//! each value against the record schema. One corrupt record aborts the
//! whole listing; traceability data must not silently lose entries.

use crate::error::{TraceError, TraceResult};
use crate::record::TraceRecord;
use serde_json::{json, Map, Value};
use trazarroz_state::{StateIterator, StateStore};

/// Sorts after any normal id character, closing the prefix range.
const RANGE_END: char = '~';

/// Builds the base type-scoped selector `{"selector":{"docType":...}}`.
pub fn base_selector(doc_type: &str) -> Value {
    json!({ "selector": { "docType": doc_type } })
}

/// Builds a selector from the base type scope plus caller filters.
///
/// The overlay is flat with no protected keys: a filter entry named
/// `docType` replaces the base scope, letting a caller deliberately cross
/// record types. Callers that must stay type-scoped should not forward a
/// `docType` filter.
pub fn selector_with_filters(doc_type: &str, filters: &Map<String, Value>) -> Value {
    let mut selector = Map::new();
    selector.insert("docType".to_string(), Value::String(doc_type.to_string()));
    for (field, value) in filters {
        selector.insert(field.clone(), value.clone());
    }
    json!({ "selector": selector })
}

/// Closes a state iterator on every exit path.
///
/// The iterator is the only scoped resource the engine acquires; the guard
/// releases it when dropped, covering early error returns during a drain.
/// A close failure during drop is swallowed - by then the drain has already
/// produced its result or error.
struct IterGuard {
    inner: Box<dyn StateIterator>,
}

impl IterGuard {
    fn new(inner: Box<dyn StateIterator>) -> Self {
        Self { inner }
    }

    fn next(&mut self) -> TraceResult<Option<trazarroz_state::KeyValue>> {
        self.inner.next().map_err(|e| TraceError::query(e.to_string()))
    }
}

impl Drop for IterGuard {
    fn drop(&mut self) {
        let _ = self.inner.close();
    }
}

/// Drains a guarded iterator into an ordered sequence of records.
fn drain<T: TraceRecord>(mut guard: IterGuard) -> TraceResult<Vec<T>> {
    let mut out = Vec::new();
    while let Some(kv) = guard.next()? {
        let record: T = serde_json::from_slice(&kv.value)
            .map_err(|e| TraceError::corrupt_record(kv.key, e.to_string()))?;
        out.push(record);
    }
    Ok(out)
}

/// Executes a rich selector query and parses every match.
///
/// Results keep the store's iteration order; no sorting is applied.
pub fn run_selector<T: TraceRecord>(store: &dyn StateStore, selector: &Value) -> TraceResult<Vec<T>> {
    let selector_json = selector.to_string();
    let it = store
        .query(&selector_json)
        .map_err(|e| TraceError::query(e.to_string()))?;
    drain(IterGuard::new(it))
}

/// Scans the record type's full key range and parses every value.
///
/// Fallback listing for stores without rich-query support: all keys in
/// `["<PREFIX>_", "<PREFIX>_~")` belong to the record type, since `~`
/// sorts after any normal id character.
pub fn run_range<T: TraceRecord>(store: &dyn StateStore) -> TraceResult<Vec<T>> {
    let start = format!("{}_", T::KEY_PREFIX);
    let end = format!("{}_{}", T::KEY_PREFIX, RANGE_END);
    let it = store
        .range(&start, &end)
        .map_err(|e| TraceError::query(e.to_string()))?;
    drain(IterGuard::new(it))
}
