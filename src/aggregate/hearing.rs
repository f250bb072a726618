// Copyright (c) 2025 - Cowboy AI, Inc.
//! Hearing Aggregate
//!
//! A hearing holds a numbered list of defendants. Numbers are append-only:
//! new defendants take the next integer after the current maximum, in the
//! order given, and removals never renumber the survivors.
//!
//! # Lifecycle
//!
//! ```text
//! uninitialized ──HearingCreated──→ active ──HearingArchived──→ archived
//! ```
//!
//! Changing defendants or adding notes before creation is a usage error.
//! Archiving is absorbed silently when there is nothing to archive.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::commands::*;
use super::{require_text, Aggregate};
use crate::errors::CommandError;
use crate::events::hearing::*;

/// A defendant on the hearing with its list number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingDefendant {
    pub defendant_id: Uuid,
    pub defendant_number: u32,
}

/// A note recorded against the hearing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingNote {
    pub note_id: Uuid,
    pub author: String,
    pub text: String,
}

/// Hearing state reconstructed from events
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HearingState {
    /// Bound by `HearingCreated`
    pub hearing_id: Option<Uuid>,

    /// Current defendants in the order they were added
    pub defendants: Vec<HearingDefendant>,

    pub notes: Vec<HearingNote>,
    pub archived: bool,
}

impl HearingState {
    pub fn is_created(&self) -> bool {
        self.hearing_id.is_some()
    }

    /// Highest number currently on the list, 0 when empty
    pub fn max_defendant_number(&self) -> u32 {
        self.defendants
            .iter()
            .map(|d| d.defendant_number)
            .max()
            .unwrap_or(0)
    }

    pub fn defendant_number(&self, defendant_id: Uuid) -> Option<u32> {
        self.defendants
            .iter()
            .find(|d| d.defendant_id == defendant_id)
            .map(|d| d.defendant_number)
    }

    pub fn has_defendant(&self, defendant_id: Uuid) -> bool {
        self.defendant_number(defendant_id).is_some()
    }

    fn created_id(&self) -> Result<Uuid, CommandError> {
        self.hearing_id.ok_or(CommandError::NotCreated {
            aggregate_type: HearingState::AGGREGATE_TYPE,
        })
    }
}

impl Aggregate for HearingState {
    const AGGREGATE_TYPE: &'static str = "hearing";

    type Command = HearingCommand;
    type Event = HearingEvent;

    fn aggregate_id(&self) -> Option<Uuid> {
        self.hearing_id
    }

    fn handle(&self, command: HearingCommand) -> Result<Vec<HearingEvent>, CommandError> {
        match command {
            HearingCommand::Create(c) => handle_create_hearing(self, c),
            HearingCommand::UpdateDefendants(c) => handle_update_defendants(self, c),
            HearingCommand::AddNote(c) => handle_add_note(self, c),
            HearingCommand::Archive(c) => handle_archive_hearing(self, c),
        }
    }

    fn apply(self, event: &HearingEvent) -> Self {
        apply_event(self, event)
    }
}

/// Apply event to state (pure function)
pub fn apply_event(state: HearingState, event: &HearingEvent) -> HearingState {
    match event {
        HearingEvent::HearingCreated(e) => HearingState {
            hearing_id: Some(e.aggregate_id),
            ..state
        },

        HearingEvent::DefendantAddedToHearing(e) => {
            let mut defendants = state.defendants;
            defendants.push(HearingDefendant {
                defendant_id: e.defendant_id,
                defendant_number: e.defendant_number,
            });
            HearingState {
                defendants,
                ..state
            }
        }

        HearingEvent::DefendantRemovedFromHearing(e) => {
            let defendants = state
                .defendants
                .into_iter()
                .filter(|d| d.defendant_id != e.defendant_id)
                .collect();
            HearingState {
                defendants,
                ..state
            }
        }

        HearingEvent::HearingNoteAdded(e) => {
            let mut notes = state.notes;
            notes.push(HearingNote {
                note_id: e.note_id,
                author: e.author.clone(),
                text: e.text.clone(),
            });
            HearingState { notes, ..state }
        }

        HearingEvent::HearingArchived(_) => HearingState {
            archived: true,
            ..state
        },
    }
}

/// Number new defendants after `start`, skipping ids already present
///
/// Returns one `DefendantAddedToHearing` per genuinely new id, in input order.
/// Fails without any events when a number would pass `u32::MAX`.
fn number_new_defendants(
    state: &HearingState,
    hearing_id: Uuid,
    start: u32,
    candidates: &[Uuid],
) -> Result<Vec<HearingEvent>, CommandError> {
    let mut seen = HashSet::new();
    let mut next = start;

    candidates
        .iter()
        .filter(|id| !state.has_defendant(**id) && seen.insert(**id))
        .map(|&defendant_id| {
            next = next.checked_add(1).ok_or_else(|| {
                CommandError::InvalidPayload(format!(
                    "defendant numbering exhausted after {}",
                    start
                ))
            })?;
            Ok(HearingEvent::DefendantAddedToHearing(DefendantAddedToHearing {
                aggregate_id: hearing_id,
                defendant_id,
                defendant_number: next,
            }))
        })
        .collect()
}

/// Handle CreateHearing command
///
/// # Business Rules
/// - Court centre must be named
/// - A hearing that already exists is left untouched (no events)
///
/// # Returns
/// `HearingCreated` followed by one `DefendantAddedToHearing` per initial
/// defendant, numbered from 1.
pub fn handle_create_hearing(
    state: &HearingState,
    command: CreateHearing,
) -> Result<Vec<HearingEvent>, CommandError> {
    require_text("court_centre", &command.court_centre)?;

    if state.is_created() {
        return Ok(Vec::new());
    }

    let mut events = vec![HearingEvent::HearingCreated(HearingCreated {
        aggregate_id: command.hearing_id,
        case_id: command.case_id,
        court_centre: command.court_centre,
        hearing_date: command.hearing_date,
        occurred_at: command.occurred_at,
    })];
    events.extend(number_new_defendants(
        state,
        command.hearing_id,
        0,
        &command.defendant_ids,
    )?);

    Ok(events)
}

/// Handle UpdateHearingDefendants command
///
/// # Business Rules
/// - Hearing must exist (usage error otherwise)
/// - Archived hearings absorb the command
/// - Every "added" event precedes every "removed" event
/// - New numbers continue from the current maximum
/// - Numbering that would pass `u32::MAX` is rejected with no events
/// - Ids already on the hearing are not re-added; ids not on the hearing
///   (after this command's additions) are not removed
pub fn handle_update_defendants(
    state: &HearingState,
    command: UpdateHearingDefendants,
) -> Result<Vec<HearingEvent>, CommandError> {
    let hearing_id = state.created_id()?;

    if state.archived {
        return Ok(Vec::new());
    }

    let mut events =
        number_new_defendants(state, hearing_id, state.max_defendant_number(), &command.added)?;

    let newly_added: HashSet<Uuid> = events
        .iter()
        .filter_map(|e| match e {
            HearingEvent::DefendantAddedToHearing(added) => Some(added.defendant_id),
            _ => None,
        })
        .collect();

    let mut removed_seen = HashSet::new();
    events.extend(
        command
            .removed
            .iter()
            .filter(|id| state.has_defendant(**id) || newly_added.contains(*id))
            .filter(|id| removed_seen.insert(**id))
            .map(|&defendant_id| {
                HearingEvent::DefendantRemovedFromHearing(DefendantRemovedFromHearing {
                    aggregate_id: hearing_id,
                    defendant_id,
                })
            }),
    );

    Ok(events)
}

/// Handle AddHearingNote command
///
/// # Business Rules
/// - Hearing must exist
/// - Note text must not be blank
/// - Re-sending a note id, or noting an archived hearing, is a no-op
pub fn handle_add_note(
    state: &HearingState,
    command: AddHearingNote,
) -> Result<Vec<HearingEvent>, CommandError> {
    let hearing_id = state.created_id()?;
    require_text("text", &command.text)?;

    if state.archived || state.notes.iter().any(|n| n.note_id == command.note_id) {
        return Ok(Vec::new());
    }

    Ok(vec![HearingEvent::HearingNoteAdded(HearingNoteAdded {
        aggregate_id: hearing_id,
        note_id: command.note_id,
        author: command.author,
        text: command.text,
        occurred_at: command.occurred_at,
    })])
}

/// Handle ArchiveHearing command
///
/// Emits `HearingArchived` exactly once per hearing.
pub fn handle_archive_hearing(
    state: &HearingState,
    command: ArchiveHearing,
) -> Result<Vec<HearingEvent>, CommandError> {
    let Some(hearing_id) = state.hearing_id else {
        return Ok(Vec::new());
    };

    if state.archived {
        return Ok(Vec::new());
    }

    Ok(vec![HearingEvent::HearingArchived(HearingArchived {
        aggregate_id: hearing_id,
        occurred_at: command.occurred_at,
    })])
}
