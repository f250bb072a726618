// Copyright (c) 2025 - Cowboy AI, Inc.
//! Task request events shared by several aggregates
//!
//! Serving material, submitting an application and creating certain documents
//! all ask case workers for follow-up work. The request is the same fact in
//! each aggregate, so it has one payload type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of follow-up work requested from case workers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Translate served material or an application into Welsh/another language
    Translation,
    /// Check served material or an application for correctness
    Review,
    /// Review a newly lodged application form
    ApplicationReview,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Translation => "translation",
            TaskType::Review => "review",
            TaskType::ApplicationReview => "application_review",
        }
    }
}

/// A follow-up task was requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequested {
    pub aggregate_id: Uuid,
    pub task_type: TaskType,

    /// Human-readable pointer to the work item (material name, applicant)
    pub reference: String,

    pub occurred_at: DateTime<Utc>,
}

impl TaskRequested {
    pub fn new(
        aggregate_id: Uuid,
        task_type: TaskType,
        reference: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            aggregate_id,
            task_type,
            reference: reference.into(),
            occurred_at,
        }
    }
}
