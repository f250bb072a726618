// Copyright (c) 2025 - Cowboy AI, Inc.
//! Court Application Domain Events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::task::TaskRequested;
use super::DomainEvent;

/// Court Application Domain Events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum CourtApplicationEvent {
    /// Review or translation was requested for the application
    TaskRequested(TaskRequested),

    /// Application was submitted to the court (terminal)
    ApplicationSubmitted(ApplicationSubmitted),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSubmitted {
    pub aggregate_id: Uuid,
    pub case_id: Uuid,
    pub applicant: String,
    pub occurred_at: DateTime<Utc>,
}

impl DomainEvent for CourtApplicationEvent {
    const KINDS: &'static [(&'static str, u32)] =
        &[("task_requested", 1), ("application_submitted", 1)];

    fn kind(&self) -> &'static str {
        match self {
            CourtApplicationEvent::TaskRequested(_) => "task_requested",
            CourtApplicationEvent::ApplicationSubmitted(_) => "application_submitted",
        }
    }

    fn aggregate_id(&self) -> Uuid {
        match self {
            CourtApplicationEvent::TaskRequested(e) => e.aggregate_id,
            CourtApplicationEvent::ApplicationSubmitted(e) => e.aggregate_id,
        }
    }
}
