// Copyright (c) 2025 - Cowboy AI, Inc.
//! Served Material Aggregate
//!
//! Serving material cascades into task requests. The order is fixed:
//!
//! ```text
//! [TaskRequested(translation)?, TaskRequested(review)?, MaterialServed]
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::commands::*;
use super::{require_text, Aggregate};
use crate::errors::CommandError;
use crate::events::material::*;
use crate::events::task::{TaskRequested, TaskType};

/// Served material state reconstructed from events
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaterialState {
    /// Bound by `MaterialServed`
    pub material_id: Option<Uuid>,
    pub served: bool,
}

impl Aggregate for MaterialState {
    const AGGREGATE_TYPE: &'static str = "material";

    type Command = MaterialCommand;
    type Event = MaterialEvent;

    fn aggregate_id(&self) -> Option<Uuid> {
        self.material_id
    }

    fn handle(&self, command: MaterialCommand) -> Result<Vec<MaterialEvent>, CommandError> {
        match command {
            MaterialCommand::Serve(c) => handle_serve_material(self, c),
        }
    }

    fn apply(self, event: &MaterialEvent) -> Self {
        apply_event(self, event)
    }
}

/// Apply event to state (pure function)
pub fn apply_event(state: MaterialState, event: &MaterialEvent) -> MaterialState {
    match event {
        MaterialEvent::TaskRequested(_) => state,
        MaterialEvent::MaterialServed(e) => MaterialState {
            material_id: Some(e.aggregate_id),
            served: true,
        },
    }
}

/// Handle ServeMaterial command
///
/// # Business Rules
/// - Material must be named and have a non-negative page count
/// - Material is served once
/// - Translation is requested before review; `MaterialServed` is last
pub fn handle_serve_material(
    state: &MaterialState,
    command: ServeMaterial,
) -> Result<Vec<MaterialEvent>, CommandError> {
    require_text("name", &command.name)?;
    let page_count = u32::try_from(command.page_count).map_err(|_| {
        CommandError::InvalidPayload(format!(
            "page_count must not be negative, got {}",
            command.page_count
        ))
    })?;

    if state.served {
        return Ok(Vec::new());
    }

    let task = |task_type| {
        MaterialEvent::TaskRequested(TaskRequested::new(
            command.material_id,
            task_type,
            command.name.clone(),
            command.occurred_at,
        ))
    };

    let mut events = Vec::with_capacity(3);
    if command.translation_required {
        events.push(task(TaskType::Translation));
    }
    if command.review_required {
        events.push(task(TaskType::Review));
    }
    events.push(MaterialEvent::MaterialServed(MaterialServed {
        aggregate_id: command.material_id,
        case_id: command.case_id,
        name: command.name,
        page_count,
        occurred_at: command.occurred_at,
    }));

    Ok(events)
}
