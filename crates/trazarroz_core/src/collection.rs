//! Record collection façade.

use crate::accessor::{state_key, StateAccessor};
use crate::error::{TraceError, TraceResult};
use crate::notify::EventSink;
use crate::query::{base_selector, run_range, run_selector, selector_with_filters};
use crate::record::TraceRecord;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use trazarroz_state::StateStore;

/// A keyed document collection for one record type.
///
/// `RecordCollection<T>` composes the keyed accessor, query engine, and
/// mutation notifier into the six public operations of a traceability
/// stage: register, edit, delete, get, list, search. Both the store and
/// the event sink are injected so the collection can run against the
/// ledger platform or an in-memory fake.
///
/// The collection relies on the platform serializing whole invocations:
/// the exists-then-put sequence inside `register`/`edit` is atomic only
/// under that guarantee. A deployment over a naively shared store must
/// wrap each check-then-write pair in its own transaction.
///
/// # Example
///
/// ```rust
/// use trazarroz_core::{EventFeed, Tolvas};
/// use trazarroz_state::MemoryStore;
///
/// let store = MemoryStore::new();
/// let events = EventFeed::new();
/// let tolvas = Tolvas::new(&store, &events);
///
/// tolvas.register(r#"{"id":"T1","variedad":"Indica"}"#).unwrap();
/// assert_eq!(tolvas.get("T1").unwrap().variedad, "Indica");
/// ```
pub struct RecordCollection<'a, T: TraceRecord> {
    accessor: StateAccessor<'a>,
    store: &'a dyn StateStore,
    events: &'a dyn EventSink,
    _marker: PhantomData<T>,
}

impl<'a, T: TraceRecord> RecordCollection<'a, T> {
    /// Creates a collection over the given store and event sink.
    pub fn new(store: &'a dyn StateStore, events: &'a dyn EventSink) -> Self {
        Self {
            accessor: StateAccessor::new(store),
            store,
            events,
            _marker: PhantomData,
        }
    }

    /// Parses a payload and checks the required `id` field.
    fn parse_payload(payload: &str) -> TraceResult<T> {
        let record: T =
            serde_json::from_str(payload).map_err(|e| TraceError::invalid_payload(e.to_string()))?;
        if record.id().is_empty() {
            return Err(TraceError::validation("the 'id' field is required"));
        }
        Ok(record)
    }

    /// Serializes a record for storage and event payloads.
    fn encode(record: &T) -> TraceResult<Vec<u8>> {
        serde_json::to_vec(record).map_err(|e| TraceError::invalid_payload(e.to_string()))
    }

    /// Creates a new record from a JSON payload.
    ///
    /// Fails with `AlreadyExists` if a record with the same id is present.
    /// An empty `docType` is defaulted to the record type's literal; a
    /// caller-supplied value is stored verbatim. Emits `Register<Entity>`
    /// with the serialized document on success.
    pub fn register(&self, payload: &str) -> TraceResult<()> {
        let mut record = Self::parse_payload(payload)?;
        if self.accessor.exists(T::KEY_PREFIX, record.id())? {
            return Err(TraceError::already_exists(record.id()));
        }
        record.default_doc_type();

        let data = Self::encode(&record)?;
        self.accessor.put(T::KEY_PREFIX, record.id(), &data)?;
        tracing::debug!(entity = T::ENTITY_NAME, id = record.id(), "registered record");
        self.events
            .emit(&format!("Register{}", T::ENTITY_NAME), &data)
    }

    /// Replaces an existing record with a new JSON payload.
    ///
    /// This is a full overwrite, not a merge-patch: fields omitted from the
    /// payload are not preserved from the prior value. Fails with `NotFound`
    /// if the id was never registered. Emits `Edit<Entity>` on success.
    pub fn edit(&self, payload: &str) -> TraceResult<()> {
        let mut record = Self::parse_payload(payload)?;
        if !self.accessor.exists(T::KEY_PREFIX, record.id())? {
            return Err(TraceError::not_found(record.id()));
        }
        record.default_doc_type();

        let data = Self::encode(&record)?;
        self.accessor.put(T::KEY_PREFIX, record.id(), &data)?;
        tracing::debug!(entity = T::ENTITY_NAME, id = record.id(), "edited record");
        self.events.emit(&format!("Edit{}", T::ENTITY_NAME), &data)
    }

    /// Removes the current-state entry for `id`.
    ///
    /// Historical versions remain in the ledger underneath. An empty id
    /// never exists, so it fails `NotFound` like any other absent key.
    /// Emits `Delete<Entity>` with the raw id bytes on success.
    pub fn delete(&self, id: &str) -> TraceResult<()> {
        if !self.accessor.exists(T::KEY_PREFIX, id)? {
            return Err(TraceError::not_found(id));
        }
        self.accessor.delete(T::KEY_PREFIX, id)?;
        tracing::debug!(entity = T::ENTITY_NAME, id, "deleted record");
        self.events
            .emit(&format!("Delete{}", T::ENTITY_NAME), id.as_bytes())
    }

    /// Fetches the record stored under `id`.
    pub fn get(&self, id: &str) -> TraceResult<T> {
        let data = self
            .accessor
            .get(T::KEY_PREFIX, id)?
            .ok_or_else(|| TraceError::not_found(id))?;
        serde_json::from_slice(&data)
            .map_err(|e| TraceError::corrupt_record(state_key(T::KEY_PREFIX, id), e.to_string()))
    }

    /// Lists all records of this type via a rich selector query.
    ///
    /// Results keep the store's iteration order, unsorted.
    pub fn list(&self) -> TraceResult<Vec<T>> {
        run_selector(self.store, &base_selector(T::DOC_TYPE))
    }

    /// Lists all records of this type via a prefix range scan.
    ///
    /// Fallback for store backends without rich-query support. Unlike
    /// [`list`](Self::list) this scopes by key prefix, not `docType`, so a
    /// mis-tagged document still appears here.
    pub fn list_by_range(&self) -> TraceResult<Vec<T>> {
        run_range(self.store)
    }

    /// Searches records with caller-supplied equality filters.
    ///
    /// `filters` is a JSON object mapping field names to values, overlaid
    /// flat onto the base type selector. The overlay has no protected keys,
    /// so a caller-supplied `docType` filter crosses record types.
    pub fn search(&self, filters: &str) -> TraceResult<Vec<T>> {
        let filters: Map<String, Value> =
            serde_json::from_str(filters).map_err(|e| TraceError::invalid_payload(e.to_string()))?;
        run_selector(self.store, &selector_with_filters(T::DOC_TYPE, &filters))
    }
}
