// Copyright (c) 2025 - Cowboy AI, Inc.
//! Aggregate root session
//!
//! [`AggregateRoot`] owns one aggregate's live state for a session:
//!
//! ```text
//! load(history) → execute(command) → sink.append(events) → fold(events)
//! ```
//!
//! Produced events are folded only after the sink accepted them, so the next
//! command observes them and a refused append leaves state untouched.

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{check_aggregate_id, decode_history, Aggregate};
use crate::config::EngineConfig;
use crate::errors::{CommandError, ProgressionResult, ReplayError};
use crate::event_store::{EventSink, EventSource};
use crate::events::versioning::UpcasterRegistry;
use crate::events::{DomainEvent, EventRecord};

/// Live state of one aggregate instance plus its stream version
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRoot<A: Aggregate> {
    state: A,
    version: u64,
    config: EngineConfig,
}

impl<A: Aggregate> Default for AggregateRoot<A> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<A: Aggregate> AggregateRoot<A> {
    /// Start from the uninitialized state with an empty history
    pub fn new(config: EngineConfig) -> Self {
        Self {
            state: A::default(),
            version: 0,
            config,
        }
    }

    /// Start from a prepared state
    ///
    /// Used by tests to set preconditions without building a history.
    pub fn from_state(state: A, version: u64, config: EngineConfig) -> Self {
        Self {
            state,
            version,
            config,
        }
    }

    /// Replay a typed history
    pub fn load(history: &[A::Event], config: EngineConfig) -> Result<Self, ReplayError> {
        if let Some(first) = history.first() {
            let expected = first.aggregate_id();
            for event in history {
                if let Err(e) = check_aggregate_id(expected, event.aggregate_id(), &config) {
                    warn!(aggregate_type = A::AGGREGATE_TYPE, error = %e, "Replay aborted");
                    return Err(e);
                }
            }
        }

        let mut root = Self::new(config);
        root.commit(history);
        debug!(
            aggregate_type = A::AGGREGATE_TYPE,
            events = history.len(),
            "Replayed history"
        );
        Ok(root)
    }

    /// Replay stored records, upcasting older schema versions
    pub fn load_records(
        records: &[EventRecord],
        upcasters: &UpcasterRegistry,
        config: EngineConfig,
    ) -> Result<Self, ReplayError> {
        let events = decode_history::<A>(records, upcasters, &config).map_err(|e| {
            warn!(aggregate_type = A::AGGREGATE_TYPE, error = %e, "Replay aborted");
            e
        })?;

        let mut root = Self::load(&events, config)?;
        root.version = records.last().map(|r| r.sequence).unwrap_or(0);
        Ok(root)
    }

    /// Read an aggregate's history from a source and replay it
    pub fn load_from<S: EventSource>(
        source: &S,
        aggregate_id: Uuid,
        upcasters: &UpcasterRegistry,
        config: EngineConfig,
    ) -> ProgressionResult<Self> {
        let records = source.read_records(aggregate_id)?;
        Ok(Self::load_records(&records, upcasters, config)?)
    }

    pub fn state(&self) -> &A {
        &self.state
    }

    /// Number of events folded into this root
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn into_state(self) -> A {
        self.state
    }

    /// Run the handler without changing state
    pub fn decide(&self, command: A::Command) -> Result<Vec<A::Event>, CommandError> {
        self.state.handle(command)
    }

    /// Fold events into live state in emission order
    pub fn commit(&mut self, events: &[A::Event]) {
        let state = std::mem::take(&mut self.state);
        self.state = events.iter().fold(state, |s, e| s.apply(e));
        self.version += events.len() as u64;
    }

    /// Handle a command, append its events, then fold them
    ///
    /// # Returns
    ///
    /// The events produced, possibly empty when the command was absorbed.
    pub fn execute<S>(&mut self, command: A::Command, sink: &mut S) -> ProgressionResult<Vec<A::Event>>
    where
        S: EventSink<A::Event>,
    {
        debug!(aggregate_type = A::AGGREGATE_TYPE, command = ?command, "Handling command");

        let events = match self.decide(command) {
            Ok(events) => events,
            Err(e) => {
                warn!(aggregate_type = A::AGGREGATE_TYPE, error = %e, "Command rejected");
                return Err(e.into());
            }
        };

        if events.is_empty() {
            info!(
                aggregate_type = A::AGGREGATE_TYPE,
                version = self.version,
                "Command absorbed, no events produced"
            );
            return Ok(events);
        }

        let Some(aggregate_id) = events.first().map(DomainEvent::aggregate_id) else {
            return Ok(events);
        };

        sink.append(aggregate_id, &events, Some(self.version))?;
        self.commit(&events);

        debug!(
            aggregate_type = A::AGGREGATE_TYPE,
            aggregate_id = %aggregate_id,
            produced = events.len(),
            version = self.version,
            kinds = ?events.iter().map(DomainEvent::kind).collect::<Vec<_>>(),
            "Events produced"
        );

        Ok(events)
    }
}
