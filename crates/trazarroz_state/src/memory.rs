//! In-memory state store for testing.

use crate::error::{StateError, StateResult};
use crate::store::{KeyValue, StateIterator, StateStore};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::ops::Bound;

/// An in-memory state store.
///
/// This store keeps all current-state entries in a sorted map and is
/// suitable for:
/// - Unit tests
/// - Integration tests
/// - Embedding without a ledger platform
///
/// Rich selector queries are evaluated locally against the stored JSON
/// documents using flat equality semantics, mirroring what the platform's
/// document store would do for selectors of the form
/// `{"selector": {"field": value, ...}}`.
///
/// # Thread Safety
///
/// The store is thread-safe and can be shared across threads, though the
/// record engine itself assumes the platform serializes whole invocations.
///
/// # Example
///
/// ```rust
/// use trazarroz_state::{StateStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.put("TOLVA_T1", br#"{"docType":"tolva","id":"T1"}"#).unwrap();
/// assert!(store.get("TOLVA_T1").unwrap().is_some());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of current-state entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Returns `true` if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Removes all entries from the store.
    pub fn clear(&self) {
        self.data.write().clear();
    }

    /// Returns all keys in lexicographic order.
    ///
    /// Useful for testing and debugging.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.data.read().keys().cloned().collect()
    }
}

/// Checks a stored value against a flat equality selector.
///
/// A value that is not valid JSON cannot match any selector; the document
/// store would never have indexed it.
fn matches_selector(value: &[u8], selector: &serde_json::Map<String, serde_json::Value>) -> bool {
    let doc: serde_json::Value = match serde_json::from_slice(value) {
        Ok(doc) => doc,
        Err(_) => return false,
    };
    selector.iter().all(|(field, expected)| doc.get(field) == Some(expected))
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StateResult<()> {
        self.data.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> StateResult<()> {
        self.data.write().remove(key);
        Ok(())
    }

    fn query(&self, selector_json: &str) -> StateResult<Box<dyn StateIterator>> {
        let parsed: serde_json::Value = serde_json::from_str(selector_json)
            .map_err(|e| StateError::invalid_selector(e.to_string()))?;
        let selector = parsed
            .get("selector")
            .and_then(|s| s.as_object())
            .ok_or_else(|| StateError::invalid_selector("missing 'selector' object"))?
            .clone();

        let items: Vec<KeyValue> = self
            .data
            .read()
            .iter()
            .filter(|(_, value)| matches_selector(value, &selector))
            .map(|(key, value)| KeyValue {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();

        Ok(Box::new(SnapshotIter::new(items)))
    }

    fn range(&self, start: &str, end: &str) -> StateResult<Box<dyn StateIterator>> {
        // An inverted or empty range matches nothing; BTreeMap::range
        // panics on start > end, so it must never see one.
        if start >= end {
            return Ok(Box::new(SnapshotIter::new(Vec::new())));
        }

        let items: Vec<KeyValue> = self
            .data
            .read()
            .range::<str, _>((Bound::Included(start), Bound::Excluded(end)))
            .map(|(key, value)| KeyValue {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();

        Ok(Box::new(SnapshotIter::new(items)))
    }
}

/// Iterator over a snapshot of matching entries.
///
/// The snapshot is taken while the store lock is held, so results reflect
/// one consistent point in time.
struct SnapshotIter {
    items: std::vec::IntoIter<KeyValue>,
    closed: bool,
}

impl SnapshotIter {
    fn new(items: Vec<KeyValue>) -> Self {
        Self {
            items: items.into_iter(),
            closed: false,
        }
    }
}

impl StateIterator for SnapshotIter {
    fn next(&mut self) -> StateResult<Option<KeyValue>> {
        if self.closed {
            return Err(StateError::IteratorClosed);
        }
        Ok(self.items.next())
    }

    fn close(&mut self) -> StateResult<()> {
        self.closed = true;
        Ok(())
    }
}
