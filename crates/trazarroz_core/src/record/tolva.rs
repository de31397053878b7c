//! Hopper-intake record.

use crate::record::TraceRecord;
use serde::{Deserialize, Serialize};

/// One truckload delivered to the hopper.
///
/// JSON field names follow the shared wire schema of the traceability
/// chain, so documents written by other participants round-trip unchanged.
/// All fields default to their zero value when absent from a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Tolva {
    /// Document-type discriminator, normally `"tolva"`.
    #[serde(rename = "docType")]
    pub doc_type: String,
    /// Unique record id within the `TOLVA_` namespace.
    pub id: String,
    /// Calendar date, `yyyy-mm-dd`.
    pub fecha: String,
    /// Order number.
    #[serde(rename = "nOrden")]
    pub n_orden: String,
    /// Truck plate number.
    #[serde(rename = "nChapa")]
    pub n_chapa: String,
    /// Driver name.
    pub chofer: String,
    /// Field or farm of origin.
    pub origen: String,
    /// Rice variety.
    pub variedad: String,
    /// Unload start time, `HH:MM`.
    #[serde(rename = "horaInicio")]
    pub hora_inicio: String,
    /// Unload end time, `HH:MM`.
    #[serde(rename = "horaSalida")]
    pub hora_salida: String,
    /// Free-text note.
    pub observacion: String,
}

impl TraceRecord for Tolva {
    const DOC_TYPE: &'static str = "tolva";
    const KEY_PREFIX: &'static str = "TOLVA";
    const ENTITY_NAME: &'static str = "Tolva";

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_roundtrip() {
        let json = r#"{
            "id": "T1",
            "fecha": "2024-05-01",
            "nOrden": "100",
            "nChapa": "ABC123",
            "chofer": "Juan",
            "origen": "Campo A",
            "variedad": "Indica",
            "horaInicio": "08:00",
            "horaSalida": "08:30"
        }"#;

        let t: Tolva = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, "T1");
        assert_eq!(t.n_orden, "100");
        assert_eq!(t.n_chapa, "ABC123");
        assert_eq!(t.hora_inicio, "08:00");
        assert_eq!(t.hora_salida, "08:30");

        let out = serde_json::to_value(&t).unwrap();
        assert_eq!(out["nOrden"], "100");
        assert_eq!(out["horaInicio"], "08:00");
        assert_eq!(out["docType"], "");
    }

    #[test]
    fn absent_fields_default_to_empty() {
        let t: Tolva = serde_json::from_str(r#"{"id":"T1"}"#).unwrap();
        assert_eq!(t.fecha, "");
        assert_eq!(t.observacion, "");
        assert_eq!(t.doc_type, "");
    }

    #[test]
    fn default_doc_type_fills_only_when_empty() {
        let mut t: Tolva = serde_json::from_str(r#"{"id":"T1"}"#).unwrap();
        t.default_doc_type();
        assert_eq!(t.doc_type, "tolva");

        let mut mistagged: Tolva =
            serde_json::from_str(r#"{"id":"T2","docType":"secado"}"#).unwrap();
        mistagged.default_doc_type();
        assert_eq!(mistagged.doc_type, "secado");
    }
}
