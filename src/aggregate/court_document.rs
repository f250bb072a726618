// Copyright (c) 2025 - Cowboy AI, Inc.
//! Court Document Aggregate
//!
//! Creating an application form automatically asks case workers to review it:
//! the `TaskRequested(ApplicationReview)` event is emitted immediately after
//! `CourtDocumentCreated` in the same result.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::commands::*;
use super::{require_text, Aggregate};
use crate::errors::CommandError;
use crate::events::court_document::*;
use crate::events::task::{TaskRequested, TaskType};

/// Court document state reconstructed from events
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourtDocumentState {
    /// Bound by `CourtDocumentCreated`
    pub document_id: Option<Uuid>,
    pub removed: bool,
}

impl Aggregate for CourtDocumentState {
    const AGGREGATE_TYPE: &'static str = "court_document";

    type Command = CourtDocumentCommand;
    type Event = CourtDocumentEvent;

    fn aggregate_id(&self) -> Option<Uuid> {
        self.document_id
    }

    fn handle(&self, command: CourtDocumentCommand) -> Result<Vec<CourtDocumentEvent>, CommandError> {
        match command {
            CourtDocumentCommand::Create(c) => handle_create_document(self, c),
            CourtDocumentCommand::Remove(c) => handle_remove_document(self, c),
        }
    }

    fn apply(self, event: &CourtDocumentEvent) -> Self {
        apply_event(self, event)
    }
}

/// Apply event to state (pure function)
pub fn apply_event(state: CourtDocumentState, event: &CourtDocumentEvent) -> CourtDocumentState {
    match event {
        CourtDocumentEvent::CourtDocumentCreated(e) => CourtDocumentState {
            document_id: Some(e.aggregate_id),
            ..state
        },
        // Task requests are facts for case workers; they do not change the document
        CourtDocumentEvent::TaskRequested(_) => state,
        CourtDocumentEvent::CourtDocumentRemoved(_) => CourtDocumentState {
            removed: true,
            ..state
        },
    }
}

/// Handle CreateCourtDocument command
///
/// # Business Rules
/// - Document must be named
/// - A document is created once
/// - Application forms get an automatic review task right after creation
pub fn handle_create_document(
    state: &CourtDocumentState,
    command: CreateCourtDocument,
) -> Result<Vec<CourtDocumentEvent>, CommandError> {
    require_text("name", &command.name)?;

    if state.document_id.is_some() {
        return Ok(Vec::new());
    }

    let review_task = command.document_type.requires_review_on_creation().then(|| {
        CourtDocumentEvent::TaskRequested(TaskRequested::new(
            command.document_id,
            TaskType::ApplicationReview,
            command.name.clone(),
            command.occurred_at,
        ))
    });

    let mut events = vec![CourtDocumentEvent::CourtDocumentCreated(CourtDocumentCreated {
        aggregate_id: command.document_id,
        case_id: command.case_id,
        document_type: command.document_type,
        name: command.name,
        occurred_at: command.occurred_at,
    })];
    events.extend(review_task);

    Ok(events)
}

/// Handle RemoveCourtDocument command
///
/// No-op when the document was never created or is already removed.
pub fn handle_remove_document(
    state: &CourtDocumentState,
    command: RemoveCourtDocument,
) -> Result<Vec<CourtDocumentEvent>, CommandError> {
    let Some(document_id) = state.document_id else {
        return Ok(Vec::new());
    };

    if state.removed {
        return Ok(Vec::new());
    }

    Ok(vec![CourtDocumentEvent::CourtDocumentRemoved(
        CourtDocumentRemoved {
            aggregate_id: document_id,
            reason: command.reason,
            occurred_at: command.occurred_at,
        },
    )])
}
