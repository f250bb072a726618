// Copyright (c) 2025 - Cowboy AI, Inc.
//! Served Material Domain Events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::task::TaskRequested;
use super::DomainEvent;

/// Served Material Domain Events
///
/// Serving emits its task requests before `MaterialServed`, so consumers see
/// the prerequisites of a served bundle before the bundle itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum MaterialEvent {
    /// Translation or review was requested for the material
    TaskRequested(TaskRequested),

    /// Material was served on the defence (terminal)
    MaterialServed(MaterialServed),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialServed {
    pub aggregate_id: Uuid,
    pub case_id: Uuid,
    pub name: String,
    pub page_count: u32,
    pub occurred_at: DateTime<Utc>,
}

impl DomainEvent for MaterialEvent {
    const KINDS: &'static [(&'static str, u32)] =
        &[("task_requested", 1), ("material_served", 1)];

    fn kind(&self) -> &'static str {
        match self {
            MaterialEvent::TaskRequested(_) => "task_requested",
            MaterialEvent::MaterialServed(_) => "material_served",
        }
    }

    fn aggregate_id(&self) -> Uuid {
        match self {
            MaterialEvent::TaskRequested(e) => e.aggregate_id,
            MaterialEvent::MaterialServed(e) => e.aggregate_id,
        }
    }
}
