//! Drying-batch record.

use crate::record::TraceRecord;
use serde::{Deserialize, Serialize};

/// One drying-batch measurement.
///
/// Numeric measurements default to `0.0` when absent from a payload;
/// `var` may be negative since it is a variance reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Secado {
    /// Document-type discriminator, normally `"secado"`.
    #[serde(rename = "docType")]
    pub doc_type: String,
    /// Unique record id within the `SECADO_` namespace.
    pub id: String,
    /// Calendar date, `yyyy-mm-dd`.
    pub fecha: String,
    /// Measurement time, `HH:MM`.
    pub hora: String,
    /// Drying batch number.
    pub nrosecada: String,
    /// Batch volume in kilograms.
    pub volumenkgr: f64,
    /// Air temperature.
    #[serde(rename = "tempAire")]
    pub temp_aire: f64,
    /// Grain temperature.
    #[serde(rename = "tempGrano")]
    pub temp_grano: f64,
    /// Grain humidity.
    pub humgrano: f64,
    /// Humidity variance since the previous measurement.
    #[serde(rename = "var")]
    pub variacion: f64,
    /// Destination silo.
    pub destino: String,
    /// Free-text note.
    pub observacion: String,
}

impl TraceRecord for Secado {
    const DOC_TYPE: &'static str = "secado";
    const KEY_PREFIX: &'static str = "SECADO";
    const ENTITY_NAME: &'static str = "Secado";

    fn id(&self) -> &str {
        &self.id
    }

    fn doc_type(&self) -> &str {
        &self.doc_type
    }

    fn default_doc_type(&mut self) {
        if self.doc_type.is_empty() {
            self.doc_type = Self::DOC_TYPE.to_string();
        }
    }
}
