// Copyright (c) 2025 - Cowboy AI, Inc.
//! Notification Domain Events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DomainEvent;

/// Notification Domain Events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum NotificationEvent {
    /// Recipient joined the distribution list
    RecipientAdded(RecipientAdded),

    /// Notification was sent to the accumulated recipients
    NotificationInitiated(NotificationInitiated),

    /// Notification request was considered and deliberately not sent
    NotificationIgnored(NotificationIgnored),
}

/// Party that receives case notifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub email: Option<String>,
    pub postal_address: Option<String>,
}

impl Recipient {
    /// Recipient has at least one non-empty delivery channel
    pub fn is_contactable(&self) -> bool {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.trim().is_empty());
        present(&self.email) || present(&self.postal_address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientAdded {
    pub aggregate_id: Uuid,
    pub recipient: Recipient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationInitiated {
    pub aggregate_id: Uuid,
    pub case_id: Uuid,
    pub template: String,

    /// Contactable recipients at the time of sending, in the order added
    pub recipients: Vec<Recipient>,

    pub occurred_at: DateTime<Utc>,
}

/// Why a notification request produced no notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredReason {
    /// The request said no notification was required
    NotRequired,
    /// No recipient with an email or postal address
    NoContactableRecipients,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationIgnored {
    pub aggregate_id: Uuid,
    pub case_id: Uuid,
    pub template: String,
    pub reason: IgnoredReason,
    pub occurred_at: DateTime<Utc>,
}

impl DomainEvent for NotificationEvent {
    const KINDS: &'static [(&'static str, u32)] = &[
        ("recipient_added", 1),
        ("notification_initiated", 1),
        ("notification_ignored", 1),
    ];

    fn kind(&self) -> &'static str {
        match self {
            NotificationEvent::RecipientAdded(_) => "recipient_added",
            NotificationEvent::NotificationInitiated(_) => "notification_initiated",
            NotificationEvent::NotificationIgnored(_) => "notification_ignored",
        }
    }

    fn aggregate_id(&self) -> Uuid {
        match self {
            NotificationEvent::RecipientAdded(e) => e.aggregate_id,
            NotificationEvent::NotificationInitiated(e) => e.aggregate_id,
            NotificationEvent::NotificationIgnored(e) => e.aggregate_id,
        }
    }
}
