// Copyright (c) 2025 - Cowboy AI, Inc.
//! Notification Aggregate
//!
//! Recipients accumulate until a notification is requested. A request then
//! resolves to exactly one of two facts:
//!
//! - `NotificationInitiated` when the caller says a notification is required
//!   and at least one recipient can be contacted
//! - `NotificationIgnored` otherwise, with the reason
//!
//! Ignoring is not terminal; a later request may still initiate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::commands::*;
use super::{require_text, Aggregate};
use crate::errors::CommandError;
use crate::events::notification::*;
use crate::events::DomainEvent;

/// Notification state reconstructed from events
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationState {
    /// Bound by the first recipient or request
    pub notification_id: Option<Uuid>,
    pub recipients: Vec<Recipient>,
    pub initiated: bool,
}

impl NotificationState {
    pub fn has_contactable_recipient(&self) -> bool {
        self.recipients.iter().any(Recipient::is_contactable)
    }
}

impl Aggregate for NotificationState {
    const AGGREGATE_TYPE: &'static str = "notification";

    type Command = NotificationCommand;
    type Event = NotificationEvent;

    fn aggregate_id(&self) -> Option<Uuid> {
        self.notification_id
    }

    fn handle(&self, command: NotificationCommand) -> Result<Vec<NotificationEvent>, CommandError> {
        match command {
            NotificationCommand::AddRecipient(c) => handle_add_recipient(self, c),
            NotificationCommand::Request(c) => handle_request_notification(self, c),
        }
    }

    fn apply(self, event: &NotificationEvent) -> Self {
        apply_event(self, event)
    }
}

/// Apply event to state (pure function)
pub fn apply_event(state: NotificationState, event: &NotificationEvent) -> NotificationState {
    let notification_id = state.notification_id.or(Some(event.aggregate_id()));

    match event {
        NotificationEvent::RecipientAdded(e) => {
            let mut recipients = state.recipients;
            recipients.push(e.recipient.clone());
            NotificationState {
                notification_id,
                recipients,
                ..state
            }
        }
        NotificationEvent::NotificationInitiated(_) => NotificationState {
            notification_id,
            initiated: true,
            ..state
        },
        NotificationEvent::NotificationIgnored(_) => NotificationState {
            notification_id,
            ..state
        },
    }
}

/// Handle AddRecipient command
///
/// # Business Rules
/// - Recipient must be named
/// - An identical recipient is not added twice
/// - Recipients added after initiation would never be contacted, so the
///   command is absorbed
pub fn handle_add_recipient(
    state: &NotificationState,
    command: AddRecipient,
) -> Result<Vec<NotificationEvent>, CommandError> {
    require_text("recipient.name", &command.recipient.name)?;

    if state.initiated || state.recipients.contains(&command.recipient) {
        return Ok(Vec::new());
    }

    Ok(vec![NotificationEvent::RecipientAdded(RecipientAdded {
        aggregate_id: state.notification_id.unwrap_or(command.notification_id),
        recipient: command.recipient,
    })])
}

/// Handle RequestNotification command
///
/// # Business Rules
/// - Template must not be blank
/// - Once initiated, further requests are no-ops
/// - Otherwise exactly one of Initiated / Ignored is emitted
pub fn handle_request_notification(
    state: &NotificationState,
    command: RequestNotification,
) -> Result<Vec<NotificationEvent>, CommandError> {
    require_text("template", &command.template)?;

    if state.initiated {
        return Ok(Vec::new());
    }

    let aggregate_id = state.notification_id.unwrap_or(command.notification_id);

    let ignored_reason = if !command.notification_required {
        Some(IgnoredReason::NotRequired)
    } else if !state.has_contactable_recipient() {
        Some(IgnoredReason::NoContactableRecipients)
    } else {
        None
    };

    let event = match ignored_reason {
        None => NotificationEvent::NotificationInitiated(NotificationInitiated {
            aggregate_id,
            case_id: command.case_id,
            template: command.template,
            recipients: state
                .recipients
                .iter()
                .filter(|r| r.is_contactable())
                .cloned()
                .collect(),
            occurred_at: command.occurred_at,
        }),
        Some(reason) => NotificationEvent::NotificationIgnored(NotificationIgnored {
            aggregate_id,
            case_id: command.case_id,
            template: command.template,
            reason,
            occurred_at: command.occurred_at,
        }),
    };

    Ok(vec![event])
}
