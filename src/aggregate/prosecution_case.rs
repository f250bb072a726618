// Copyright (c) 2025 - Cowboy AI, Inc.
//! Prosecution Case Aggregate
//!
//! A case is initiated once and referred to court once. Referral has two
//! event kinds: the original `CaseReferredToCourt` and the newer
//! `CaseReferredToCourtV2`, which also carries the next hearing. The handler
//! chooses the kind from the command; replay folds both.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::commands::*;
use super::{require_text, Aggregate};
use crate::errors::CommandError;
use crate::events::prosecution_case::*;

/// Prosecution case state reconstructed from events
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProsecutionCaseState {
    /// Bound by `CaseInitiated`
    pub case_id: Option<Uuid>,

    /// Set by either referral kind
    pub referred: bool,
}

impl ProsecutionCaseState {
    pub fn is_initiated(&self) -> bool {
        self.case_id.is_some()
    }
}

impl Aggregate for ProsecutionCaseState {
    const AGGREGATE_TYPE: &'static str = "prosecution_case";

    type Command = ProsecutionCaseCommand;
    type Event = ProsecutionCaseEvent;

    fn aggregate_id(&self) -> Option<Uuid> {
        self.case_id
    }

    fn handle(
        &self,
        command: ProsecutionCaseCommand,
    ) -> Result<Vec<ProsecutionCaseEvent>, CommandError> {
        match command {
            ProsecutionCaseCommand::Initiate(c) => handle_initiate_case(self, c),
            ProsecutionCaseCommand::ReferToCourt(c) => handle_refer_to_court(self, c),
        }
    }

    fn apply(self, event: &ProsecutionCaseEvent) -> Self {
        apply_event(self, event)
    }
}

/// Apply event to state (pure function)
pub fn apply_event(
    state: ProsecutionCaseState,
    event: &ProsecutionCaseEvent,
) -> ProsecutionCaseState {
    match event {
        ProsecutionCaseEvent::CaseInitiated(e) => ProsecutionCaseState {
            case_id: Some(e.aggregate_id),
            ..state
        },
        ProsecutionCaseEvent::CaseReferredToCourt(_)
        | ProsecutionCaseEvent::CaseReferredToCourtV2(_) => ProsecutionCaseState {
            referred: true,
            ..state
        },
    }
}

/// Handle InitiateCase command
///
/// # Business Rules
/// - URN must not be blank
/// - Initiating an initiated case is a no-op
pub fn handle_initiate_case(
    state: &ProsecutionCaseState,
    command: InitiateCase,
) -> Result<Vec<ProsecutionCaseEvent>, CommandError> {
    require_text("urn", &command.urn)?;

    if state.is_initiated() {
        return Ok(Vec::new());
    }

    Ok(vec![ProsecutionCaseEvent::CaseInitiated(CaseInitiated {
        aggregate_id: command.case_id,
        urn: command.urn,
        defendant_ids: command.defendant_ids,
        occurred_at: command.occurred_at,
    })])
}

/// Handle ReferCaseToCourt command
///
/// # Business Rules
/// - Case must be initiated (usage error otherwise)
/// - A case is referred at most once
/// - `next_hearing` present selects `CaseReferredToCourtV2`, absent selects
///   `CaseReferredToCourt`
pub fn handle_refer_to_court(
    state: &ProsecutionCaseState,
    command: ReferCaseToCourt,
) -> Result<Vec<ProsecutionCaseEvent>, CommandError> {
    let case_id = state.case_id.ok_or(CommandError::NotCreated {
        aggregate_type: ProsecutionCaseState::AGGREGATE_TYPE,
    })?;
    require_text("reason", &command.reason)?;
    if let Some(next) = &command.next_hearing {
        require_text("next_hearing.court_centre", &next.court_centre)?;
    }

    if state.referred {
        return Ok(Vec::new());
    }

    let event = match command.next_hearing {
        Some(next_hearing) => ProsecutionCaseEvent::CaseReferredToCourtV2(CaseReferredToCourtV2 {
            aggregate_id: case_id,
            reason: command.reason,
            next_hearing,
            occurred_at: command.occurred_at,
        }),
        None => ProsecutionCaseEvent::CaseReferredToCourt(CaseReferredToCourt {
            aggregate_id: case_id,
            reason: command.reason,
            occurred_at: command.occurred_at,
        }),
    };

    Ok(vec![event])
}
