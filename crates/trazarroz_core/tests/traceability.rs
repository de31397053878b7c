//! End-to-end traceability flows over the in-memory store.

use proptest::prelude::*;
use serde_json::json;
use trazarroz_core::{EventFeed, Secados, TraceError, Tolvas};
use trazarroz_state::MemoryStore;

#[test]
fn tolva_full_lifecycle() {
    let store = MemoryStore::new();
    let events = EventFeed::new();
    let tolvas = Tolvas::new(&store, &events);

    let payload = r#"{
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

    tolvas.register(payload).unwrap();

    let t = tolvas.get("T1").unwrap();
    assert_eq!(t.doc_type, "tolva");
    assert_eq!(t.fecha, "2024-05-01");
    assert_eq!(t.n_orden, "100");
    assert_eq!(t.n_chapa, "ABC123");
    assert_eq!(t.chofer, "Juan");
    assert_eq!(t.origen, "Campo A");
    assert_eq!(t.variedad, "Indica");
    assert_eq!(t.hora_inicio, "08:00");
    assert_eq!(t.hora_salida, "08:30");

    assert!(matches!(
        tolvas.register(payload),
        Err(TraceError::AlreadyExists { .. })
    ));

    tolvas.delete("T1").unwrap();
    assert!(matches!(tolvas.get("T1"), Err(TraceError::NotFound { .. })));
}

#[test]
fn secado_listing_stays_type_scoped() {
    let store = MemoryStore::new();
    let events = EventFeed::new();
    let tolvas = Tolvas::new(&store, &events);
    let secados = Secados::new(&store, &events);

    secados
        .register(
            r#"{
                "id": "S1",
                "fecha": "2024-05-01",
                "hora": "09:00",
                "nrosecada": "1",
                "volumenkgr": 500.0,
                "tempAire": 60.0,
                "tempGrano": 40.0,
                "humgrano": 18.5,
                "var": 0.2,
                "destino": "Silo 1"
            }"#,
        )
        .unwrap();

    let listed = secados.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "S1");
    assert_eq!(listed[0].volumenkgr, 500.0);
    assert_eq!(listed[0].humgrano, 18.5);

    assert!(tolvas.list().unwrap().is_empty());
}

#[test]
fn list_returns_every_registered_record() {
    let store = MemoryStore::new();
    let events = EventFeed::new();
    let tolvas = Tolvas::new(&store, &events);

    for i in 0..7 {
        tolvas
            .register(&format!(
                r#"{{"id":"T{i}","variedad":"V{i}","chofer":"C{i}"}}"#
            ))
            .unwrap();
    }

    let listed = tolvas.list().unwrap();
    assert_eq!(listed.len(), 7);
    for t in &listed {
        let n = t.id.strip_prefix('T').unwrap();
        assert_eq!(t.variedad, format!("V{n}"));
        assert_eq!(t.chofer, format!("C{n}"));
    }
}

#[test]
fn search_excludes_other_entity_even_with_shared_field() {
    let store = MemoryStore::new();
    let events = EventFeed::new();
    let tolvas = Tolvas::new(&store, &events);
    let secados = Secados::new(&store, &events);

    tolvas
        .register(r#"{"id":"T1","fecha":"2024-05-01","variedad":"Indica"}"#)
        .unwrap();
    tolvas
        .register(r#"{"id":"T2","fecha":"2024-05-01","variedad":"Japonica"}"#)
        .unwrap();
    // Same fecha on the other entity type
    secados
        .register(r#"{"id":"S1","fecha":"2024-05-01"}"#)
        .unwrap();

    let by_variety = tolvas.search(r#"{"variedad":"Indica"}"#).unwrap();
    assert_eq!(by_variety.len(), 1);
    assert_eq!(by_variety[0].id, "T1");

    let by_date = tolvas.search(r#"{"fecha":"2024-05-01"}"#).unwrap();
    assert_eq!(by_date.len(), 2);
    assert!(by_date.iter().all(|t| t.doc_type == "tolva"));
}

#[test]
fn range_fallback_matches_selector_listing() {
    let store = MemoryStore::new();
    let events = EventFeed::new();
    let secados = Secados::new(&store, &events);

    for i in 0..4 {
        secados
            .register(&format!(r#"{{"id":"S{i}","nrosecada":"{i}"}}"#))
            .unwrap();
    }

    let by_selector = secados.list().unwrap();
    let by_range = secados.list_by_range().unwrap();
    assert_eq!(by_selector.len(), 4);
    assert_eq!(by_selector, by_range);
}

#[test]
fn both_stages_share_one_store_and_feed() {
    let store = MemoryStore::new();
    let events = EventFeed::new();
    let rx = events.subscribe();

    let tolvas = Tolvas::new(&store, &events);
    let secados = Secados::new(&store, &events);

    tolvas.register(r#"{"id":"T1"}"#).unwrap();
    secados.register(r#"{"id":"S1"}"#).unwrap();
    secados.delete("S1").unwrap();

    assert_eq!(rx.recv().unwrap().name, "RegisterTolva");
    assert_eq!(rx.recv().unwrap().name, "RegisterSecado");
    let deleted = rx.recv().unwrap();
    assert_eq!(deleted.name, "DeleteSecado");
    assert_eq!(deleted.payload, b"S1");

    assert_eq!(store.keys(), vec!["TOLVA_T1".to_string()]);
}

proptest! {
    /// Register followed by Get returns the document unchanged, with
    /// docType defaulted.
    #[test]
    fn register_get_roundtrip(
        id in "[A-Za-z0-9-]{1,16}",
        fecha in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
        variedad in "[A-Za-z ]{0,20}",
        chofer in "[A-Za-z ]{0,20}",
    ) {
        let store = MemoryStore::new();
        let events = EventFeed::new();
        let tolvas = Tolvas::new(&store, &events);

        let payload = json!({
            "id": id,
            "fecha": fecha,
            "variedad": variedad,
            "chofer": chofer,
        })
        .to_string();

        tolvas.register(&payload).unwrap();

        let t = tolvas.get(&id).unwrap();
        prop_assert_eq!(t.id, id);
        prop_assert_eq!(t.fecha, fecha);
        prop_assert_eq!(t.variedad, variedad);
        prop_assert_eq!(t.chofer, chofer);
        prop_assert_eq!(t.doc_type, "tolva");
        prop_assert_eq!(t.observacion, "");
    }
}
