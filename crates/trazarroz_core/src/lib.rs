//! # trazarroz core
//!
//! Record persistence and query engine for a rice-processing traceability
//! chain. Two stages are recorded as JSON documents in a shared keyed
//! state store: intake at the hopper ([`Tolva`]) and drying
//! ([`Secado`]).
//!
//! This crate provides:
//! - The two record schemas with their document-type discriminators
//! - Keyed access under the `PREFIX_id` composite-key scheme
//! - Rich selector queries and prefix-range scans
//! - Mutation events for every successful write
//! - A generic collection façade exposing register, edit, delete, get,
//!   list, and search per record type
//!
//! Consensus, replication, identity, and transport belong to the external
//! ledger platform; the engine assumes the platform serializes whole
//! invocations and applies each one atomically.
//!
//! ## Example
//!
//! ```rust
//! use trazarroz_core::{EventFeed, Secados, Tolvas};
//! use trazarroz_state::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let events = EventFeed::new();
//!
//! let tolvas = Tolvas::new(&store, &events);
//! tolvas.register(r#"{"id":"T1","variedad":"Indica"}"#).unwrap();
//!
//! let secados = Secados::new(&store, &events);
//! secados.register(r#"{"id":"S1","volumenkgr":500.0}"#).unwrap();
//!
//! assert_eq!(tolvas.list().unwrap().len(), 1);
//! assert_eq!(secados.search(r#"{"volumenkgr":500.0}"#).unwrap().len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod accessor;
mod collection;
mod error;
mod notify;
mod query;
mod record;

pub use accessor::{state_key, StateAccessor};
pub use collection::RecordCollection;
pub use error::{TraceError, TraceResult};
pub use notify::{Event, EventFeed, EventSink, FailingSink};
pub use query::{base_selector, run_range, run_selector, selector_with_filters};
pub use record::{Secado, Tolva, TraceRecord};

/// Hopper-intake collection.
pub type Tolvas<'a> = RecordCollection<'a, Tolva>;

/// Drying-stage collection.
pub type Secados<'a> = RecordCollection<'a, Secado>;
