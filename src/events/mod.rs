// Copyright (c) 2025 - Cowboy AI, Inc.
//! Case Progression Domain Events
//!
//! Events are immutable facts. They are the only durable unit of truth and the
//! only input to replay.
//!
//! # Event Principles
//!
//! 1. **Immutable**: once produced, an event never changes
//! 2. **Past tense**: named for what happened (`HearingArchived`, not `ArchiveHearing`)
//! 3. **Closed per aggregate**: each aggregate owns one enum; the compiler
//!    enforces that every kind is folded
//! 4. **Versioned**: each kind carries a schema version for upcasting
//!
//! # Wire Shape
//!
//! Every event enum is adjacently tagged:
//!
//! ```text
//! { "kind": "defendant_added_to_hearing", "payload": { ... } }
//! ```
//!
//! [`record::EventRecord`] is the stored form. Decoding a kind the aggregate
//! does not list in [`DomainEvent::KINDS`] fails instead of being skipped.
//!
//! # Versioned Variants
//!
//! A logical fact may have two kinds when a newer command shape carries more
//! data (`CaseReferredToCourt` and `CaseReferredToCourtV2`). Handlers pick the
//! kind; old histories keep folding unchanged.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

pub mod court_application;
pub mod court_document;
pub mod hearing;
pub mod material;
pub mod notification;
pub mod prosecution_case;
pub mod record;
pub mod task;
pub mod versioning;

pub use court_application::CourtApplicationEvent;
pub use court_document::CourtDocumentEvent;
pub use hearing::HearingEvent;
pub use material::MaterialEvent;
pub use notification::NotificationEvent;
pub use prosecution_case::ProsecutionCaseEvent;
pub use record::EventRecord;
pub use task::{TaskRequested, TaskType};

/// Behaviour shared by every aggregate event enum
pub trait DomainEvent: Serialize + DeserializeOwned + Clone + Debug + PartialEq {
    /// Every kind this enum can decode, with its current schema version
    const KINDS: &'static [(&'static str, u32)];

    /// Wire discriminator of this event
    fn kind(&self) -> &'static str;

    /// Aggregate instance the event belongs to
    fn aggregate_id(&self) -> Uuid;

    /// Current schema version for a kind, `None` if the kind is unknown
    fn schema_version(kind: &str) -> Option<u32> {
        Self::KINDS
            .iter()
            .find(|(known, _)| *known == kind)
            .map(|(_, version)| *version)
    }

    /// Schema version this event is written with
    fn event_version(&self) -> u32 {
        Self::schema_version(self.kind()).unwrap_or(1)
    }
}
