// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Log Collaborator
//!
//! The aggregate core performs no I/O. This module defines the two seams it
//! talks to when a caller drives a full command cycle:
//!
//! ```text
//! EventSource ──records──→ replay → State
//!                                     ↓
//!                 Command → Aggregate::handle → Events → EventSink
//! ```
//!
//! # Event Log Requirements
//!
//! 1. **Append-Only**: Events are never updated or deleted
//! 2. **Ordered**: Records keep emission order within an aggregate
//! 3. **All-or-nothing**: An append stores every event or none
//! 4. **Versioned**: `expected_version` gives optimistic concurrency
//!
//! [`InMemoryEventStore`] implements both seams for tests and tools.
//! Durable implementations live outside this crate.

use uuid::Uuid;

use crate::errors::StoreError;
use crate::events::{DomainEvent, EventRecord};

pub mod memory;

pub use memory::InMemoryEventStore;

/// Destination for newly produced events
pub trait EventSink<E: DomainEvent> {
    /// Append events to an aggregate's stream
    ///
    /// Events are written atomically, in slice order.
    ///
    /// # Arguments
    ///
    /// * `aggregate_id` - The aggregate these events belong to
    /// * `events` - Events to append
    /// * `expected_version` - Current version the caller observed, `None` to skip the check
    ///
    /// # Returns
    ///
    /// The stream version after appending
    ///
    /// # Errors
    ///
    /// - `ConcurrencyConflict` if `expected_version` does not match
    /// - `Serialization` if an event cannot be encoded
    fn append(
        &mut self,
        aggregate_id: Uuid,
        events: &[E],
        expected_version: Option<u64>,
    ) -> Result<u64, StoreError>;
}

/// Source of stored histories
pub trait EventSource {
    /// Read every record for an aggregate in stored order
    fn read_records(&self, aggregate_id: Uuid) -> Result<Vec<EventRecord>, StoreError>;

    /// Read records with `sequence >= from_version`
    fn read_records_from(
        &self,
        aggregate_id: Uuid,
        from_version: u64,
    ) -> Result<Vec<EventRecord>, StoreError> {
        Ok(self
            .read_records(aggregate_id)?
            .into_iter()
            .filter(|r| r.sequence >= from_version)
            .collect())
    }

    /// Highest stored sequence, `None` if the aggregate has no events
    fn version(&self, aggregate_id: Uuid) -> Result<Option<u64>, StoreError> {
        Ok(self
            .read_records(aggregate_id)?
            .last()
            .map(|r| r.sequence))
    }
}
