// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for court-progression
//!
//! Provides deterministic commands, events and prepared states. All UUIDs and
//! timestamps are fixed constants so that tests are reproducible.
//!
//! # Design Principles
//! - No `Uuid::now_v7()` or `Utc::now()` anywhere in tests
//! - Prepared states are built with struct-update syntax on public fields,
//!   never by reaching into private internals
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use court_progression::aggregate::commands::*;
use court_progression::aggregate::hearing::HearingDefendant;
use court_progression::events::court_document::DocumentType;
use court_progression::events::hearing::*;
use court_progression::events::notification::Recipient;
use court_progression::events::prosecution_case::NextHearing;
use court_progression::HearingState;

// Fixed test UUIDs (UUID v7 layout, deterministic)
pub const HEARING_ID: &str = "01934f4a-1000-7000-8000-000000001000";
pub const CASE_ID: &str = "01934f4a-2000-7000-8000-000000002000";
pub const NOTIFICATION_ID: &str = "01934f4a-3000-7000-8000-000000003000";
pub const DOCUMENT_ID: &str = "01934f4a-4000-7000-8000-000000004000";
pub const MATERIAL_ID: &str = "01934f4a-5000-7000-8000-000000005000";
pub const APPLICATION_ID: &str = "01934f4a-6000-7000-8000-000000006000";

pub const DEFENDANT_A: &str = "01934f4a-d001-7000-8000-00000000d001";
pub const DEFENDANT_B: &str = "01934f4a-d002-7000-8000-00000000d002";
pub const DEFENDANT_C: &str = "01934f4a-d003-7000-8000-00000000d003";

// Fixed test timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

/// Parse a fixed UUID from a constant string
pub fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).expect("Invalid UUID in test fixture")
}

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

pub fn hearing_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).expect("Invalid hearing date in test fixture")
}

/// Deterministic defendant id for generated tests
pub fn defendant(n: u32) -> Uuid {
    Uuid::from_u128(0xd000_0000 + n as u128)
}

// ============================================================================
// Hearing
// ============================================================================

pub fn create_hearing(defendant_ids: Vec<Uuid>) -> HearingCommand {
    HearingCommand::Create(CreateHearing {
        hearing_id: parse_uuid(HEARING_ID),
        case_id: parse_uuid(CASE_ID),
        court_centre: "Westminster Magistrates".to_string(),
        hearing_date: hearing_date(),
        defendant_ids,
        occurred_at: fixed_timestamp(),
    })
}

pub fn update_defendants(added: Vec<Uuid>, removed: Vec<Uuid>) -> HearingCommand {
    HearingCommand::UpdateDefendants(UpdateHearingDefendants { added, removed })
}

pub fn archive_hearing() -> HearingCommand {
    HearingCommand::Archive(ArchiveHearing {
        occurred_at: fixed_timestamp(),
    })
}

/// Active hearing whose defendants carry the given numbers
pub fn hearing_with_numbers(numbers: &[u32]) -> HearingState {
    HearingState {
        hearing_id: Some(parse_uuid(HEARING_ID)),
        defendants: numbers
            .iter()
            .map(|&n| HearingDefendant {
                defendant_id: defendant(n),
                defendant_number: n,
            })
            .collect(),
        ..HearingState::default()
    }
}

pub fn hearing_created_event() -> HearingEvent {
    HearingEvent::HearingCreated(HearingCreated {
        aggregate_id: parse_uuid(HEARING_ID),
        case_id: parse_uuid(CASE_ID),
        court_centre: "Westminster Magistrates".to_string(),
        hearing_date: hearing_date(),
        occurred_at: fixed_timestamp(),
    })
}

pub fn defendant_added_event(defendant_id: Uuid, defendant_number: u32) -> HearingEvent {
    HearingEvent::DefendantAddedToHearing(DefendantAddedToHearing {
        aggregate_id: parse_uuid(HEARING_ID),
        defendant_id,
        defendant_number,
    })
}

pub fn defendant_removed_event(defendant_id: Uuid) -> HearingEvent {
    HearingEvent::DefendantRemovedFromHearing(DefendantRemovedFromHearing {
        aggregate_id: parse_uuid(HEARING_ID),
        defendant_id,
    })
}

// ============================================================================
// Prosecution case
// ============================================================================

pub fn initiate_case() -> ProsecutionCaseCommand {
    ProsecutionCaseCommand::Initiate(InitiateCase {
        case_id: parse_uuid(CASE_ID),
        urn: "28SC1234525".to_string(),
        defendant_ids: vec![parse_uuid(DEFENDANT_A)],
        occurred_at: fixed_timestamp(),
    })
}

pub fn next_hearing() -> NextHearing {
    NextHearing {
        court_centre: "Southwark Crown Court".to_string(),
        hearing_date: NaiveDate::from_ymd_opt(2026, 4, 14).expect("Invalid date in test fixture"),
        hearing_type: "Plea and trial preparation".to_string(),
    }
}

pub fn refer_case(next_hearing: Option<NextHearing>) -> ProsecutionCaseCommand {
    ProsecutionCaseCommand::ReferToCourt(ReferCaseToCourt {
        reason: "Sent for trial".to_string(),
        next_hearing,
        occurred_at: fixed_timestamp(),
    })
}

// ============================================================================
// Notification
// ============================================================================

pub fn contactable_recipient() -> Recipient {
    Recipient {
        name: "Defence solicitor".to_string(),
        email: Some("defence@solicitors.example".to_string()),
        postal_address: None,
    }
}

pub fn uncontactable_recipient() -> Recipient {
    Recipient {
        name: "Witness".to_string(),
        email: None,
        postal_address: None,
    }
}

pub fn add_recipient(recipient: Recipient) -> NotificationCommand {
    NotificationCommand::AddRecipient(AddRecipient {
        notification_id: parse_uuid(NOTIFICATION_ID),
        recipient,
    })
}

pub fn request_notification(notification_required: bool) -> NotificationCommand {
    NotificationCommand::Request(RequestNotification {
        notification_id: parse_uuid(NOTIFICATION_ID),
        case_id: parse_uuid(CASE_ID),
        template: "hearing_listed".to_string(),
        notification_required,
        occurred_at: fixed_timestamp(),
    })
}

// ============================================================================
// Court document, material, application
// ============================================================================

pub fn create_document(document_type: DocumentType) -> CourtDocumentCommand {
    CourtDocumentCommand::Create(CreateCourtDocument {
        document_id: parse_uuid(DOCUMENT_ID),
        case_id: parse_uuid(CASE_ID),
        document_type,
        name: "Application to vary bail".to_string(),
        occurred_at: fixed_timestamp(),
    })
}

pub fn remove_document() -> CourtDocumentCommand {
    CourtDocumentCommand::Remove(RemoveCourtDocument {
        reason: "Uploaded to wrong case".to_string(),
        occurred_at: fixed_timestamp(),
    })
}

pub fn serve_material(translation_required: bool, review_required: bool) -> MaterialCommand {
    MaterialCommand::Serve(ServeMaterial {
        material_id: parse_uuid(MATERIAL_ID),
        case_id: parse_uuid(CASE_ID),
        name: "Prosecution bundle".to_string(),
        page_count: 212,
        translation_required,
        review_required,
        occurred_at: fixed_timestamp(),
    })
}

pub fn submit_application(review_required: bool, translation_required: bool) -> CourtApplicationCommand {
    CourtApplicationCommand::Submit(SubmitApplication {
        application_id: parse_uuid(APPLICATION_ID),
        case_id: parse_uuid(CASE_ID),
        applicant: "A. Defendant".to_string(),
        review_required,
        translation_required,
        occurred_at: fixed_timestamp(),
    })
}
