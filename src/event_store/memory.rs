// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory event log
//!
//! Keeps one ordered `Vec<EventRecord>` per aggregate. Events are encoded on
//! append so that reads go through the same decode and upcast path a durable
//! store would.

use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use super::{EventSink, EventSource};
use crate::errors::StoreError;
use crate::events::{DomainEvent, EventRecord};

/// Event log held in process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    streams: HashMap<Uuid, Vec<EventRecord>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with records written elsewhere
    ///
    /// Records are grouped by aggregate and kept in the order given.
    pub fn from_records(records: impl IntoIterator<Item = EventRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store
                .streams
                .entry(record.aggregate_id)
                .or_default()
                .push(record);
        }
        store
    }

    /// Number of aggregates with at least one event
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    fn current_version(&self, aggregate_id: Uuid) -> u64 {
        self.streams
            .get(&aggregate_id)
            .and_then(|stream| stream.last())
            .map(|r| r.sequence)
            .unwrap_or(0)
    }
}

impl<E: DomainEvent> EventSink<E> for InMemoryEventStore {
    fn append(
        &mut self,
        aggregate_id: Uuid,
        events: &[E],
        expected_version: Option<u64>,
    ) -> Result<u64, StoreError> {
        let current = self.current_version(aggregate_id);

        if let Some(expected) = expected_version {
            if expected != current {
                return Err(StoreError::ConcurrencyConflict {
                    aggregate_id,
                    expected,
                    actual: current,
                });
            }
        }

        // Encode everything before touching the stream
        let records = events
            .iter()
            .zip(current + 1..)
            .map(|(event, sequence)| EventRecord::encode(event, sequence))
            .collect::<Result<Vec<_>, _>>()?;

        let version = current + records.len() as u64;
        if !records.is_empty() {
            self.streams.entry(aggregate_id).or_default().extend(records);
        }

        debug!(
            aggregate_id = %aggregate_id,
            appended = events.len(),
            version,
            "Appended events"
        );

        Ok(version)
    }
}

impl EventSource for InMemoryEventStore {
    fn read_records(&self, aggregate_id: Uuid) -> Result<Vec<EventRecord>, StoreError> {
        Ok(self.streams.get(&aggregate_id).cloned().unwrap_or_default())
    }

    fn version(&self, aggregate_id: Uuid) -> Result<Option<u64>, StoreError> {
        Ok(self
            .streams
            .get(&aggregate_id)
            .and_then(|stream| stream.last())
            .map(|r| r.sequence))
    }
}
