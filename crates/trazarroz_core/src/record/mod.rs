//! Record schemas for the traceability chain.

mod secado;
mod tolva;

pub use secado::Secado;
pub use tolva::Tolva;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Trait for documents stored in the traceability keyspace.
///
/// Each record kind carries three constants that drive the generic
/// collection façade:
/// - [`DOC_TYPE`](TraceRecord::DOC_TYPE) - the document-type discriminator
///   written into every stored document and used by type-scoped queries
/// - [`KEY_PREFIX`](TraceRecord::KEY_PREFIX) - the composite-key namespace;
///   keys are formed as `PREFIX_id`
/// - [`ENTITY_NAME`](TraceRecord::ENTITY_NAME) - the name suffix of emitted
///   mutation events (`Register<Entity>`, `Edit<Entity>`, `Delete<Entity>`)
pub trait TraceRecord: Serialize + DeserializeOwned {
    /// The fixed document-type literal for this record kind.
    const DOC_TYPE: &'static str;

    /// The key-namespace prefix for this record kind.
    const KEY_PREFIX: &'static str;

    /// The entity name used in mutation event names.
    const ENTITY_NAME: &'static str;

    /// Returns the record's unique id.
    fn id(&self) -> &str;

    /// Returns the document-type discriminator as stored.
    fn doc_type(&self) -> &str;

    /// Sets the doc-type to [`DOC_TYPE`](TraceRecord::DOC_TYPE) if empty.
    ///
    /// A caller-supplied non-empty value is kept verbatim, matching the
    /// source system: a mis-tagged document is stored but will not appear
    /// in type-scoped listings.
    fn default_doc_type(&mut self);
}
