// Copyright (c) 2025 - Cowboy AI, Inc.
//! Prosecution Case Domain Events
//!
//! Referral has two kinds. `CaseReferredToCourt` is the original fact;
//! `CaseReferredToCourtV2` is produced when the referral already knows the
//! next hearing. Both fold into the same referral state.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DomainEvent;

/// Prosecution Case Domain Events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum ProsecutionCaseEvent {
    /// Case was initiated by the prosecuting authority
    CaseInitiated(CaseInitiated),

    /// Case was referred to court (no next hearing known)
    CaseReferredToCourt(CaseReferredToCourt),

    /// Case was referred to court with a next hearing
    CaseReferredToCourtV2(CaseReferredToCourtV2),
}

/// Where and when a case is next heard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextHearing {
    pub court_centre: String,
    pub hearing_date: NaiveDate,
    pub hearing_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseInitiated {
    pub aggregate_id: Uuid,

    /// Unique reference number issued by the prosecuting authority
    pub urn: String,

    pub defendant_ids: Vec<Uuid>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReferredToCourt {
    pub aggregate_id: Uuid,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReferredToCourtV2 {
    pub aggregate_id: Uuid,
    pub reason: String,
    pub next_hearing: NextHearing,
    pub occurred_at: DateTime<Utc>,
}

impl DomainEvent for ProsecutionCaseEvent {
    const KINDS: &'static [(&'static str, u32)] = &[
        ("case_initiated", 1),
        ("case_referred_to_court", 1),
        ("case_referred_to_court_v2", 1),
    ];

    fn kind(&self) -> &'static str {
        match self {
            ProsecutionCaseEvent::CaseInitiated(_) => "case_initiated",
            ProsecutionCaseEvent::CaseReferredToCourt(_) => "case_referred_to_court",
            ProsecutionCaseEvent::CaseReferredToCourtV2(_) => "case_referred_to_court_v2",
        }
    }

    fn aggregate_id(&self) -> Uuid {
        match self {
            ProsecutionCaseEvent::CaseInitiated(e) => e.aggregate_id,
            ProsecutionCaseEvent::CaseReferredToCourt(e) => e.aggregate_id,
            ProsecutionCaseEvent::CaseReferredToCourtV2(e) => e.aggregate_id,
        }
    }
}
