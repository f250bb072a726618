// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Functional Aggregates
//!
//! This module provides the aggregate core shared by every case progression
//! aggregate:
//! - Handlers are pure functions: `(State, Command) → Result<Vec<Event>, CommandError>`
//! - State reconstruction via event folding: `[Event] → State`
//! - No I/O, no clock, no randomness inside the core
//!
//! # Event Sourcing Pattern
//!
//! ```text
//! Command → Aggregate::handle → Events → EventSink (collaborator)
//!    ↓             ↓               ↓
//! Intent      Validation         Facts ──→ Aggregate::apply → State
//! ```
//!
//! # Fold Pattern
//!
//! State is reconstructed by folding events from the zero value:
//!
//! ```rust,ignore
//! let state = events.iter().fold(HearingState::default(), |state, event| {
//!     state.apply(event)
//! });
//! ```
//!
//! # Handler Outcomes
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | `Ok(vec![])` | Idempotent no-op: the effect already holds |
//! | `Ok(events)` | Ordered facts; the order is part of the contract |
//! | `Err(CommandError)` | Usage error, never absorbed silently |
//!
//! Handlers validate the whole command before building the first event, so an
//! error never follows a partially built sequence.
//!
//! # Aggregates
//!
//! - [`hearing`] - defendant numbering, notes, archiving
//! - [`prosecution_case`] - initiation and versioned referral
//! - [`notification`] - recipients and initiated/ignored selection
//! - [`court_document`] - creation with automatic review task
//! - [`material`] - serving with translation → review cascade
//! - [`court_application`] - submission with review → translation cascade

use serde::Serialize;
use std::fmt::Debug;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::errors::{CommandError, ReplayError};
use crate::events::versioning::UpcasterRegistry;
use crate::events::{DomainEvent, EventRecord};

pub mod commands;
pub mod court_application;
pub mod court_document;
pub mod hearing;
pub mod material;
pub mod notification;
pub mod prosecution_case;
pub mod root;

pub use commands::*;
pub use court_application::CourtApplicationState;
pub use court_document::CourtDocumentState;
pub use hearing::HearingState;
pub use material::MaterialState;
pub use notification::NotificationState;
pub use prosecution_case::ProsecutionCaseState;
pub use root::AggregateRoot;

/// An event-sourced aggregate
///
/// The implementing type is the aggregate's state. `Default` is the
/// uninitialized zero value that replay starts from.
pub trait Aggregate: Default + Clone + Debug + PartialEq + Serialize {
    /// Aggregate type name (`"hearing"`, `"material"`, ...)
    const AGGREGATE_TYPE: &'static str;

    /// Closed set of commands this aggregate accepts
    type Command: Debug;

    /// Closed set of events this aggregate produces and folds
    type Event: DomainEvent;

    /// Identity bound by the creation event, `None` while uninitialized
    fn aggregate_id(&self) -> Option<Uuid>;

    /// Decide which events a command produces
    ///
    /// Must be pure: the result depends only on `self` and `command`.
    fn handle(&self, command: Self::Command) -> Result<Vec<Self::Event>, CommandError>;

    /// Fold one event into the state
    ///
    /// Must be pure and total; events are facts and cannot be refused.
    fn apply(self, event: &Self::Event) -> Self;
}

/// Fold a single event into state
pub fn fold<A: Aggregate>(state: A, event: &A::Event) -> A {
    state.apply(event)
}

/// Rebuild state by folding a history from the zero value
pub fn replay<A: Aggregate>(events: &[A::Event]) -> A {
    events.iter().fold(A::default(), fold::<A>)
}

/// Rebuild state from stored records
///
/// Each record is checked, upcast to its kind's current version, decoded and
/// folded in stored order. The first failure aborts the whole replay; no
/// partially folded state is returned.
pub fn replay_records<A: Aggregate>(
    records: &[EventRecord],
    upcasters: &UpcasterRegistry,
    config: &EngineConfig,
) -> Result<A, ReplayError> {
    let events = decode_history::<A>(records, upcasters, config)?;
    Ok(replay(&events))
}

/// Decode stored records into typed events without folding them
pub fn decode_history<A: Aggregate>(
    records: &[EventRecord],
    upcasters: &UpcasterRegistry,
    config: &EngineConfig,
) -> Result<Vec<A::Event>, ReplayError> {
    let expected_id = records.first().map(|r| r.aggregate_id);

    records
        .iter()
        .map(|record| {
            if let Some(expected) = expected_id {
                check_aggregate_id(expected, record.aggregate_id, config)?;
            }
            let event = decode_record::<A>(record, upcasters, config)?;
            // Payload must agree with its envelope
            check_aggregate_id(record.aggregate_id, event.aggregate_id(), config)?;
            Ok(event)
        })
        .collect()
}

/// Check that a history event belongs to the aggregate being loaded
pub(crate) fn check_aggregate_id(
    expected: Uuid,
    found: Uuid,
    config: &EngineConfig,
) -> Result<(), ReplayError> {
    if config.verify_aggregate_id && expected != found {
        return Err(ReplayError::AggregateMismatch { expected, found });
    }
    Ok(())
}

fn decode_record<A: Aggregate>(
    record: &EventRecord,
    upcasters: &UpcasterRegistry,
    config: &EngineConfig,
) -> Result<A::Event, ReplayError> {
    let latest = <A::Event as DomainEvent>::schema_version(&record.kind).ok_or_else(|| {
        ReplayError::UnknownEventKind {
            aggregate_type: A::AGGREGATE_TYPE,
            kind: record.kind.clone(),
        }
    })?;

    if record.event_version > latest {
        if config.reject_future_versions {
            return Err(ReplayError::UnsupportedVersion {
                kind: record.kind.clone(),
                found: record.event_version,
                latest,
            });
        }
        return record.decode(A::AGGREGATE_TYPE);
    }

    if record.event_version < latest {
        let current = upcasters.upcast_record(record.clone(), latest)?;
        return current.decode(A::AGGREGATE_TYPE);
    }

    record.decode(A::AGGREGATE_TYPE)
}

/// Require a non-blank text field in a command payload
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), CommandError> {
    if value.trim().is_empty() {
        return Err(CommandError::InvalidPayload(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}
