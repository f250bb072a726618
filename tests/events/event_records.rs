// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stored Event Record Tests
//!
//! Verifies the adjacently tagged wire shape, the JSON-lines form read by the
//! replay tool, and that every aggregate refuses kinds it does not own.

use serde_json::json;
use test_case::test_case;

use court_progression::aggregate::{decode_history, Aggregate};
use court_progression::events::{EventRecord, HearingEvent};
use court_progression::{
    CourtApplicationState, CourtDocumentState, EngineConfig, HearingState, MaterialState,
    NotificationState, ProsecutionCaseState, ReplayError, UpcasterRegistry,
};

use crate::fixtures::*;

fn decode_as<A: Aggregate>(record: EventRecord) -> Result<Vec<A::Event>, ReplayError> {
    decode_history::<A>(&[record], &UpcasterRegistry::standard(), &EngineConfig::default())
}

#[test]
fn test_event_wire_shape_is_kind_and_payload() {
    let event = defendant_added_event(parse_uuid(DEFENDANT_A), 3);

    let json = serde_json::to_value(&event).unwrap();

    assert_eq!(
        json,
        json!({
            "kind": "defendant_added_to_hearing",
            "payload": {
                "aggregate_id": HEARING_ID,
                "defendant_id": DEFENDANT_A,
                "defendant_number": 3
            }
        })
    );
}

#[test]
fn test_record_json_lines_round_trip() {
    let history = vec![
        hearing_created_event(),
        defendant_added_event(parse_uuid(DEFENDANT_A), 1),
    ];
    let jsonl: String = history
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let record = EventRecord::encode(e, i as u64 + 1).unwrap();
            serde_json::to_string(&record).unwrap() + "\n"
        })
        .collect();

    let records: Vec<EventRecord> = jsonl
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let decoded = decode_history::<HearingState>(
        &records,
        &UpcasterRegistry::standard(),
        &EngineConfig::default(),
    )
    .unwrap();

    assert_eq!(decoded, history);
    assert_eq!(records[0].kind, "hearing_created");
    assert_eq!(records[0].payload["hearing_date"], "2026-03-02");
}

/// A hearing record offered to every other aggregate
fn foreign_record() -> EventRecord {
    EventRecord::encode(&hearing_created_event(), 1).unwrap()
}

#[test_case(decode_as::<ProsecutionCaseState>(foreign_record()).unwrap_err() => "prosecution_case"; "case")]
#[test_case(decode_as::<NotificationState>(foreign_record()).unwrap_err() => "notification"; "notification")]
#[test_case(decode_as::<CourtDocumentState>(foreign_record()).unwrap_err() => "court_document"; "document")]
#[test_case(decode_as::<MaterialState>(foreign_record()).unwrap_err() => "material"; "material")]
#[test_case(decode_as::<CourtApplicationState>(foreign_record()).unwrap_err() => "court_application"; "application")]
fn test_foreign_kind_is_unknown(err: ReplayError) -> &'static str {
    match err {
        ReplayError::UnknownEventKind { aggregate_type, kind } => {
            assert_eq!(kind, "hearing_created");
            aggregate_type
        }
        other => panic!("Expected UnknownEventKind, got {:?}", other),
    }
}

#[test]
fn test_shared_task_kind_decodes_per_aggregate() {
    // task_requested is listed by material, documents and applications alike
    let record = EventRecord {
        aggregate_id: parse_uuid(MATERIAL_ID),
        sequence: 1,
        kind: "task_requested".to_string(),
        event_version: 1,
        payload: json!({
            "aggregate_id": MATERIAL_ID,
            "task_type": "translation",
            "reference": "Prosecution bundle",
            "occurred_at": FIXED_TIMESTAMP
        }),
    };

    assert!(decode_as::<MaterialState>(record.clone()).is_ok());
    assert!(decode_as::<CourtApplicationState>(record.clone()).is_ok());
    assert!(decode_as::<CourtDocumentState>(record.clone()).is_ok());
    assert!(decode_as::<HearingState>(record).is_err());
}

#[test]
fn test_malformed_payload_aborts_replay() {
    let mut record = EventRecord::encode(&hearing_created_event(), 1).unwrap();
    record.payload = json!({ "aggregate_id": HEARING_ID });

    let result = decode_as::<HearingState>(record);

    assert!(matches!(
        result,
        Err(ReplayError::MalformedPayload { ref kind, .. }) if kind == "hearing_created"
    ));
}

#[test]
fn test_decoded_history_is_typed() {
    let record = EventRecord::encode(&hearing_created_event(), 1).unwrap();

    let events = decode_as::<HearingState>(record).unwrap();

    assert!(matches!(events[0], HearingEvent::HearingCreated(_)));
}
