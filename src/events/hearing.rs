// Copyright (c) 2025 - Cowboy AI, Inc.
//! Hearing Domain Events

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::versioning::{UpcastError, Upcaster};
use super::DomainEvent;

/// Hearing Domain Events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum HearingEvent {
    /// Hearing was listed
    HearingCreated(HearingCreated),

    /// Defendant joined the hearing with a sequence number
    DefendantAddedToHearing(DefendantAddedToHearing),

    /// Defendant left the hearing
    DefendantRemovedFromHearing(DefendantRemovedFromHearing),

    /// Free-text note recorded against the hearing
    HearingNoteAdded(HearingNoteAdded),

    /// Hearing was archived (terminal)
    HearingArchived(HearingArchived),
}

/// Hearing was listed at a court centre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingCreated {
    /// Hearing aggregate ID
    pub aggregate_id: Uuid,

    /// Case the hearing was listed for
    pub case_id: Uuid,

    pub court_centre: String,
    pub hearing_date: NaiveDate,
    pub occurred_at: DateTime<Utc>,
}

/// Defendant was added to the hearing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefendantAddedToHearing {
    pub aggregate_id: Uuid,
    pub defendant_id: Uuid,

    /// 1-based position on the hearing's defendant list
    pub defendant_number: u32,
}

/// Defendant was removed from the hearing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefendantRemovedFromHearing {
    pub aggregate_id: Uuid,
    pub defendant_id: Uuid,
}

/// Note was added to the hearing
///
/// Version 2 added `author`. Version 1 records are upcast with an
/// `"unknown"` author, see [`HearingNoteAuthorUpcaster`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingNoteAdded {
    pub aggregate_id: Uuid,
    pub note_id: Uuid,
    pub author: String,
    pub text: String,
    pub occurred_at: DateTime<Utc>,
}

/// Hearing was archived
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingArchived {
    pub aggregate_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl DomainEvent for HearingEvent {
    const KINDS: &'static [(&'static str, u32)] = &[
        ("hearing_created", 1),
        ("defendant_added_to_hearing", 1),
        ("defendant_removed_from_hearing", 1),
        ("hearing_note_added", 2),
        ("hearing_archived", 1),
    ];

    fn kind(&self) -> &'static str {
        match self {
            HearingEvent::HearingCreated(_) => "hearing_created",
            HearingEvent::DefendantAddedToHearing(_) => "defendant_added_to_hearing",
            HearingEvent::DefendantRemovedFromHearing(_) => "defendant_removed_from_hearing",
            HearingEvent::HearingNoteAdded(_) => "hearing_note_added",
            HearingEvent::HearingArchived(_) => "hearing_archived",
        }
    }

    fn aggregate_id(&self) -> Uuid {
        match self {
            HearingEvent::HearingCreated(e) => e.aggregate_id,
            HearingEvent::DefendantAddedToHearing(e) => e.aggregate_id,
            HearingEvent::DefendantRemovedFromHearing(e) => e.aggregate_id,
            HearingEvent::HearingNoteAdded(e) => e.aggregate_id,
            HearingEvent::HearingArchived(e) => e.aggregate_id,
        }
    }
}

/// Upcasts `hearing_note_added` v1 payloads, which predate note authorship
pub struct HearingNoteAuthorUpcaster;

impl Upcaster for HearingNoteAuthorUpcaster {
    fn kind(&self) -> &str {
        "hearing_note_added"
    }

    fn from_version(&self) -> u32 {
        1
    }

    fn to_version(&self) -> u32 {
        2
    }

    fn upcast(&self, mut payload: serde_json::Value) -> Result<serde_json::Value, UpcastError> {
        let obj = payload.as_object_mut().ok_or_else(|| {
            UpcastError::TransformationFailed(
                "hearing_note_added payload is not a JSON object".to_string(),
            )
        })?;
        obj.entry("author")
            .or_insert_with(|| serde_json::json!("unknown"));
        Ok(payload)
    }

    fn validate(&self, payload: &serde_json::Value) -> Result<(), UpcastError> {
        if payload.get("author").is_none() {
            return Err(UpcastError::MissingField("author".to_string()));
        }
        Ok(())
    }
}
