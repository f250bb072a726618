// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event-sourced aggregates for criminal case progression
//!
//! This crate provides the pure aggregate core (hearings, prosecution cases,
//! notifications, court documents, served material, court applications),
//! the stored event record codec with upcasting, and an in-memory event log
//! for tests and tools. It performs no I/O of its own.

pub mod aggregate;
pub mod config;
pub mod errors;
pub mod event_store;
pub mod events;

// Re-export commonly used types
pub use aggregate::{
    fold, replay, replay_records, Aggregate, AggregateRoot, CourtApplicationState,
    CourtDocumentState, HearingState, MaterialState, NotificationState, ProsecutionCaseState,
};
pub use config::EngineConfig;
pub use errors::{CommandError, ProgressionError, ProgressionResult, ReplayError, StoreError};
pub use event_store::{EventSink, EventSource, InMemoryEventStore};
pub use events::versioning::{UpcastError, Upcaster, UpcasterRegistry};
pub use events::{DomainEvent, EventRecord, TaskRequested, TaskType};
