// Copyright (c) 2025 - Cowboy AI, Inc.
//! Court Document Domain Events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::task::TaskRequested;
use super::DomainEvent;

/// Court Document Domain Events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum CourtDocumentEvent {
    /// Document was uploaded against a case
    CourtDocumentCreated(CourtDocumentCreated),

    /// Follow-up work was requested for the document
    TaskRequested(TaskRequested),

    /// Document was withdrawn from the case (terminal)
    CourtDocumentRemoved(CourtDocumentRemoved),
}

/// Sub-type of a court document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Evidence,
    ApplicationForm,
    CourtOrder,
    Correspondence,
}

impl DocumentType {
    /// Creating a document of this type automatically requests a review task
    pub fn requires_review_on_creation(&self) -> bool {
        matches!(self, DocumentType::ApplicationForm)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtDocumentCreated {
    pub aggregate_id: Uuid,
    pub case_id: Uuid,
    pub document_type: DocumentType,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtDocumentRemoved {
    pub aggregate_id: Uuid,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

impl DomainEvent for CourtDocumentEvent {
    const KINDS: &'static [(&'static str, u32)] = &[
        ("court_document_created", 1),
        ("task_requested", 1),
        ("court_document_removed", 1),
    ];

    fn kind(&self) -> &'static str {
        match self {
            CourtDocumentEvent::CourtDocumentCreated(_) => "court_document_created",
            CourtDocumentEvent::TaskRequested(_) => "task_requested",
            CourtDocumentEvent::CourtDocumentRemoved(_) => "court_document_removed",
        }
    }

    fn aggregate_id(&self) -> Uuid {
        match self {
            CourtDocumentEvent::CourtDocumentCreated(e) => e.aggregate_id,
            CourtDocumentEvent::TaskRequested(e) => e.aggregate_id,
            CourtDocumentEvent::CourtDocumentRemoved(e) => e.aggregate_id,
        }
    }
}
