//! # trazarroz state
//!
//! State-store trait and implementations for the trazarroz record engine.
//!
//! This crate provides the lowest-level storage abstraction of the system.
//! Stores hold the **current state** of the shared ledger keyspace - the
//! latest bytes under each string key. Ledger history, consensus, and
//! durability live in the external platform, not here.
//!
//! ## Design Principles
//!
//! - Stores are opaque byte stores keyed by string
//! - Rich selector queries and lexicographic range scans are the only two
//!   read-many modes
//! - Iterators are scoped resources with an explicit `close`
//! - Stores must be `Send + Sync`; no concurrency control of their own
//!
//! ## Available Stores
//!
//! - [`MemoryStore`] - For testing and ephemeral embedding
//!
//! ## Example
//!
//! ```rust
//! use trazarroz_state::{StateStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.put("TOLVA_T1", br#"{"docType":"tolva","id":"T1"}"#).unwrap();
//! let mut it = store.range("TOLVA_", "TOLVA_~").unwrap();
//! assert!(it.next().unwrap().is_some());
//! it.close().unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod memory;
mod store;

pub use error::{StateError, StateResult};
pub use memory::MemoryStore;
pub use store::{KeyValue, StateIterator, StateStore};
