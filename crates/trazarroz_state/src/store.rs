//! State-store trait definition.

use crate::error::StateResult;

/// A key/value pair returned by a state iterator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// The composite state key.
    pub key: String,
    /// The stored document bytes.
    pub value: Vec<u8>,
}

/// An iterator over state query results.
///
/// Iterators are the only scoped resource handed out by a store. Callers
/// must call [`close`](StateIterator::close) on every exit path, including
/// error paths, before the enclosing operation returns. Higher layers wrap
/// the iterator in a close-on-drop guard to enforce this.
pub trait StateIterator {
    /// Advances the iterator.
    ///
    /// Returns `None` once all results have been produced.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails mid-iteration or the
    /// iterator was already closed.
    fn next(&mut self) -> StateResult<Option<KeyValue>>;

    /// Releases the iterator's resources.
    ///
    /// Calling `next` after `close` returns [`StateError::IteratorClosed`].
    /// Closing twice is a no-op.
    ///
    /// [`StateError::IteratorClosed`]: crate::StateError::IteratorClosed
    ///
    /// # Errors
    ///
    /// Returns an error if releasing the underlying resource fails.
    fn close(&mut self) -> StateResult<()>;
}

/// A keyed current-state store shared with the ledger platform.
///
/// Stores are **opaque byte stores keyed by string**. They hold the latest
/// value under each key; historical versions live in the ledger underneath
/// and are not visible through this trait.
///
/// # Invariants
///
/// - `get` returns exactly the bytes last `put` under that key, or `None`
/// - `delete` removes only the current-state entry
/// - `query` evaluates a rich selector document against all current values
/// - `range` scans keys lexicographically in the half-open `[start, end)`
/// - Stores must be `Send + Sync`; operations take `&self` so one store can
///   back several collections
///
/// The store performs no concurrency control of its own: the platform
/// serializes whole invocations, so a read-then-write sequence issued by one
/// invocation is atomic relative to others. Implementations targeting a
/// shared backend without that guarantee must add their own transactional
/// wrapper around each check-then-write pair.
///
/// # Implementors
///
/// - [`super::MemoryStore`] - For testing and ephemeral use
pub trait StateStore: Send + Sync {
    /// Reads the current value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Writes `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn put(&self, key: &str, value: &[u8]) -> StateResult<()>;

    /// Removes the current-state entry under `key`.
    ///
    /// Deleting an absent key is a no-op at this level; existence checks
    /// belong to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn delete(&self, key: &str) -> StateResult<()>;

    /// Executes a rich selector query.
    ///
    /// The selector is a JSON document of the form
    /// `{"selector": {"field": value, ...}}`; every listed field must equal
    /// the given value for a document to match.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is malformed or the store fails.
    fn query(&self, selector_json: &str) -> StateResult<Box<dyn StateIterator>>;

    /// Scans all keys in the half-open range `[start, end)`.
    ///
    /// An inverted or empty range (`start >= end`) yields no results.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn range(&self, start: &str, end: &str) -> StateResult<Box<dyn StateIterator>>;
}
