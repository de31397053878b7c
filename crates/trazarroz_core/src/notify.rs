//! Mutation notification for committed record writes.
//!
//! Every successful Register/Edit/Delete emits exactly one named event
//! after the state write, carrying the resulting document (or, for Delete,
//! the raw id bytes). On the ledger platform the sink is the platform's
//! event API; embedded and test setups use [`EventFeed`], which fans events
//! out to in-process subscribers.

use crate::error::{TraceError, TraceResult};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};

/// A single emitted mutation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Sequence number assigned at emission, monotonically increasing.
    pub sequence: u64,
    /// Event name, e.g. `RegisterTolva`, `EditSecado`, `DeleteTolva`.
    pub name: String,
    /// Serialized document for Register/Edit; raw id bytes for Delete.
    pub payload: Vec<u8>,
}

/// Sink for mutation events.
///
/// `emit` is invoked exactly once per successful mutation, after the state
/// write. An emission failure is surfaced as the whole operation's error
/// even though the write already happened in the accessor's view; whether
/// those effects stand is decided by the platform's invocation boundary.
pub trait EventSink: Send + Sync {
    /// Emits a named event with the given payload.
    fn emit(&self, name: &str, payload: &[u8]) -> TraceResult<()>;
}

/// An in-process event feed with subscribers and bounded history.
///
/// The feed:
/// - Preserves emission order
/// - Supports multiple subscribers
/// - Keeps a bounded history for cursor-based polling
/// - Is thread-safe
///
/// # Example
///
/// ```rust
/// use trazarroz_core::{EventFeed, EventSink};
///
/// let feed = EventFeed::new();
/// let rx = feed.subscribe();
///
/// feed.emit("RegisterTolva", b"{}").unwrap();
/// assert_eq!(rx.recv().unwrap().name, "RegisterTolva");
/// ```
pub struct EventFeed {
    /// Subscribers (senders).
    subscribers: RwLock<Vec<Sender<Event>>>,
    /// History of recent events for polling.
    history: RwLock<Vec<Event>>,
    /// Maximum history size.
    max_history: usize,
    /// Next sequence number to assign.
    next_sequence: AtomicU64,
}

impl EventFeed {
    /// Creates a new event feed.
    pub fn new() -> Self {
        Self::with_max_history(10000)
    }

    /// Creates an event feed with a specific history limit.
    pub fn with_max_history(max_history: usize) -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
            history: RwLock::new(Vec::new()),
            max_history,
            next_sequence: AtomicU64::new(1),
        }
    }

    /// Subscribes to the feed.
    ///
    /// Returns a receiver that will receive all future events. The receiver
    /// should be polled regularly to avoid unbounded memory growth.
    pub fn subscribe(&self) -> Receiver<Event> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.write().push(tx);
        rx
    }

    /// Polls events with sequence greater than `cursor`, up to `limit`.
    ///
    /// Useful for catch-up scenarios without a live subscription.
    pub fn poll(&self, cursor: u64, limit: usize) -> Vec<Event> {
        let history = self.history.read();
        history
            .iter()
            .filter(|e| e.sequence > cursor)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Returns the latest sequence number in history.
    pub fn latest_sequence(&self) -> u64 {
        self.history.read().last().map(|e| e.sequence).unwrap_or(0)
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Returns the number of events in history.
    pub fn history_len(&self) -> usize {
        self.history.read().len()
    }
}

impl Default for EventFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for EventFeed {
    fn emit(&self, name: &str, payload: &[u8]) -> TraceResult<()> {
        let event = Event {
            sequence: self.next_sequence.fetch_add(1, Ordering::SeqCst),
            name: name.to_string(),
            payload: payload.to_vec(),
        };

        {
            let mut history = self.history.write();
            history.push(event.clone());
            if history.len() > self.max_history {
                let to_remove = history.len() - self.max_history;
                history.drain(0..to_remove);
            }
        }

        // Send to subscribers (remove disconnected ones)
        let mut subscribers = self.subscribers.write();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        Ok(())
    }
}

/// A sink that fails every emission.
///
/// Lets tests exercise the notify-failure path of the collection façade.
#[derive(Debug, Default)]
pub struct FailingSink;

impl EventSink for FailingSink {
    fn emit(&self, name: &str, _payload: &[u8]) -> TraceResult<()> {
        Err(TraceError::notify(format!("sink rejected event {name}")))
    }
}
