// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stored event records
//!
//! [`EventRecord`] is the shape an event log collaborator persists: the
//! discriminator and schema version sit beside an opaque JSON payload so that
//! records can be upcast before they are decoded into a typed event.
//!
//! Decoding is strict. A kind that the target event enum does not list fails
//! with [`ReplayError::UnknownEventKind`]; it is never skipped.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::ReplayError;
use crate::events::DomainEvent;

/// A persisted event with its position in the aggregate's stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Aggregate instance the event belongs to
    pub aggregate_id: Uuid,

    /// 1-based position in the aggregate's stream
    pub sequence: u64,

    /// Wire discriminator (`hearing_created`, `material_served`, ...)
    pub kind: String,

    /// Schema version of `payload`
    pub event_version: u32,

    /// Kind-specific payload
    pub payload: Value,
}

impl EventRecord {
    /// Encode a typed event at the given stream position
    pub fn encode<E: DomainEvent>(event: &E, sequence: u64) -> Result<Self, serde_json::Error> {
        let mut tagged = serde_json::to_value(event)?;
        let payload = tagged
            .get_mut("payload")
            .map(Value::take)
            .unwrap_or(Value::Null);

        Ok(Self {
            aggregate_id: event.aggregate_id(),
            sequence,
            kind: event.kind().to_string(),
            event_version: event.event_version(),
            payload,
        })
    }

    /// Decode into a typed event
    ///
    /// The payload must already be at the kind's current schema version; see
    /// [`crate::events::versioning::UpcasterRegistry`].
    pub fn decode<E: DomainEvent>(&self, aggregate_type: &'static str) -> Result<E, ReplayError> {
        if E::schema_version(&self.kind).is_none() {
            return Err(ReplayError::UnknownEventKind {
                aggregate_type,
                kind: self.kind.clone(),
            });
        }

        let tagged = serde_json::json!({
            "kind": self.kind,
            "payload": self.payload,
        });

        serde_json::from_value(tagged).map_err(|e| ReplayError::MalformedPayload {
            kind: self.kind.clone(),
            reason: e.to_string(),
        })
    }
}
