// Copyright (c) 2025 - Cowboy AI, Inc.
//! Court Application Aggregate
//!
//! Submission cascades review before translation, the reverse of served
//! material, and ends with `ApplicationSubmitted`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::commands::*;
use super::{require_text, Aggregate};
use crate::errors::CommandError;
use crate::events::court_application::*;
use crate::events::task::{TaskRequested, TaskType};

/// Court application state reconstructed from events
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourtApplicationState {
    /// Bound by `ApplicationSubmitted`
    pub application_id: Option<Uuid>,
    pub submitted: bool,
}

impl Aggregate for CourtApplicationState {
    const AGGREGATE_TYPE: &'static str = "court_application";

    type Command = CourtApplicationCommand;
    type Event = CourtApplicationEvent;

    fn aggregate_id(&self) -> Option<Uuid> {
        self.application_id
    }

    fn handle(
        &self,
        command: CourtApplicationCommand,
    ) -> Result<Vec<CourtApplicationEvent>, CommandError> {
        match command {
            CourtApplicationCommand::Submit(c) => handle_submit_application(self, c),
        }
    }

    fn apply(self, event: &CourtApplicationEvent) -> Self {
        apply_event(self, event)
    }
}

/// Apply event to state (pure function)
pub fn apply_event(
    state: CourtApplicationState,
    event: &CourtApplicationEvent,
) -> CourtApplicationState {
    match event {
        CourtApplicationEvent::TaskRequested(_) => state,
        CourtApplicationEvent::ApplicationSubmitted(e) => CourtApplicationState {
            application_id: Some(e.aggregate_id),
            submitted: true,
        },
    }
}

/// Handle SubmitApplication command
///
/// # Business Rules
/// - Applicant must be named
/// - An application is submitted once
/// - Review is requested before translation; `ApplicationSubmitted` is last
pub fn handle_submit_application(
    state: &CourtApplicationState,
    command: SubmitApplication,
) -> Result<Vec<CourtApplicationEvent>, CommandError> {
    require_text("applicant", &command.applicant)?;

    if state.submitted {
        return Ok(Vec::new());
    }

    let tasks = [
        (command.review_required, TaskType::Review),
        (command.translation_required, TaskType::Translation),
    ];

    let mut events: Vec<CourtApplicationEvent> = tasks
        .into_iter()
        .filter(|(required, _)| *required)
        .map(|(_, task_type)| {
            CourtApplicationEvent::TaskRequested(TaskRequested::new(
                command.application_id,
                task_type,
                command.applicant.clone(),
                command.occurred_at,
            ))
        })
        .collect();

    events.push(CourtApplicationEvent::ApplicationSubmitted(
        ApplicationSubmitted {
            aggregate_id: command.application_id,
            case_id: command.case_id,
            applicant: command.applicant,
            occurred_at: command.occurred_at,
        },
    ));

    Ok(events)
}
