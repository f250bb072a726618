// Copyright (c) 2025 - Cowboy AI, Inc.
//! Commands for the Case Progression Aggregates
//!
//! Commands express intent and can be rejected; events express facts and
//! cannot. Commands are never stored, only the events they produce.
//!
//! # Time Handling
//!
//! Commands that produce timestamped events carry an explicit `occurred_at`.
//! **NEVER call `Utc::now()` in domain logic**. Time is passed from the
//! application layer so that handlers stay deterministic.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::events::court_document::DocumentType;
use crate::events::notification::Recipient;
use crate::events::prosecution_case::NextHearing;

// ============================================================================
// Hearing
// ============================================================================

/// Commands accepted by the hearing aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HearingCommand {
    Create(CreateHearing),
    UpdateDefendants(UpdateHearingDefendants),
    AddNote(AddHearingNote),
    Archive(ArchiveHearing),
}

/// List a hearing, optionally with its initial defendants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateHearing {
    pub hearing_id: Uuid,
    pub case_id: Uuid,
    pub court_centre: String,
    pub hearing_date: NaiveDate,

    /// Initial defendants, numbered from 1 in this order
    pub defendant_ids: Vec<Uuid>,

    pub occurred_at: DateTime<Utc>,
}

/// Add and remove defendants in one step
///
/// Additions are always emitted before removals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateHearingDefendants {
    pub added: Vec<Uuid>,
    pub removed: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddHearingNote {
    pub note_id: Uuid,
    pub author: String,
    pub text: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveHearing {
    pub occurred_at: DateTime<Utc>,
}

// ============================================================================
// Prosecution case
// ============================================================================

/// Commands accepted by the prosecution case aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProsecutionCaseCommand {
    Initiate(InitiateCase),
    ReferToCourt(ReferCaseToCourt),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiateCase {
    pub case_id: Uuid,
    pub urn: String,
    pub defendant_ids: Vec<Uuid>,
    pub occurred_at: DateTime<Utc>,
}

/// Refer an initiated case to court
///
/// Older callers send no `next_hearing` and keep producing
/// `CaseReferredToCourt`; callers that know the next hearing get
/// `CaseReferredToCourtV2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferCaseToCourt {
    pub reason: String,
    pub next_hearing: Option<NextHearing>,
    pub occurred_at: DateTime<Utc>,
}

// ============================================================================
// Notification
// ============================================================================

/// Commands accepted by the notification aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationCommand {
    AddRecipient(AddRecipient),
    Request(RequestNotification),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRecipient {
    pub notification_id: Uuid,
    pub recipient: Recipient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestNotification {
    pub notification_id: Uuid,
    pub case_id: Uuid,
    pub template: String,

    /// Caller's view of whether anyone needs to be told
    pub notification_required: bool,

    pub occurred_at: DateTime<Utc>,
}

// ============================================================================
// Court document
// ============================================================================

/// Commands accepted by the court document aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourtDocumentCommand {
    Create(CreateCourtDocument),
    Remove(RemoveCourtDocument),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCourtDocument {
    pub document_id: Uuid,
    pub case_id: Uuid,
    pub document_type: DocumentType,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveCourtDocument {
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

// ============================================================================
// Served material
// ============================================================================

/// Commands accepted by the served material aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialCommand {
    Serve(ServeMaterial),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeMaterial {
    pub material_id: Uuid,
    pub case_id: Uuid,
    pub name: String,

    /// Signed because upstream systems send it unchecked; negative is rejected
    pub page_count: i32,

    pub translation_required: bool,

    /// Material flagged for a correctness check before the defence relies on it
    pub review_required: bool,

    pub occurred_at: DateTime<Utc>,
}

// ============================================================================
// Court application
// ============================================================================

/// Commands accepted by the court application aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourtApplicationCommand {
    Submit(SubmitApplication),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitApplication {
    pub application_id: Uuid,
    pub case_id: Uuid,
    pub applicant: String,
    pub review_required: bool,
    pub translation_required: bool,
    pub occurred_at: DateTime<Utc>,
}
