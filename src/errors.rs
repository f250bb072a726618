// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for aggregate operations
//!
//! Three fault families cross the aggregate boundary:
//! - [`CommandError`]: a handler refused a command (usage error, never an
//!   idempotent no-op)
//! - [`ReplayError`]: a stored history could not be folded into state
//! - [`StoreError`]: the event log collaborator refused an append
//!
//! [`ProgressionError`] wraps all of them for callers that drive a full
//! load → decide → append → fold cycle.

use thiserror::Error;
use uuid::Uuid;

use crate::events::versioning::UpcastError;

/// Command rejected by a handler
///
/// An empty event list is how handlers report "nothing to do". This type is
/// reserved for commands that must not be absorbed silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Command requires a creation event that has not happened yet
    #[error("{aggregate_type} has not been created")]
    NotCreated { aggregate_type: &'static str },

    /// Payload is structurally impossible (negative counts, empty required text)
    #[error("Invalid command payload: {0}")]
    InvalidPayload(String),
}

/// Failure while rebuilding state from history
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// Stored kind is not part of the aggregate's event vocabulary
    #[error("Unknown {aggregate_type} event kind '{kind}'")]
    UnknownEventKind {
        aggregate_type: &'static str,
        kind: String,
    },

    /// Kind is known but the payload does not match its schema
    #[error("Malformed payload for event kind '{kind}': {reason}")]
    MalformedPayload { kind: String, reason: String },

    /// Event belongs to a different aggregate instance
    #[error("Event for aggregate {found} found in history of aggregate {expected}")]
    AggregateMismatch { expected: Uuid, found: Uuid },

    /// Stored version is newer than anything this build understands
    #[error("Event kind '{kind}' stored at version {found}, latest known is {latest}")]
    UnsupportedVersion { kind: String, found: u32, latest: u32 },

    /// Schema migration failed
    #[error("Upcast failed: {0}")]
    Upcast(#[from] UpcastError),
}

/// Failure reported by the event log collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Optimistic concurrency check failed
    #[error("Concurrency conflict on {aggregate_id}: expected version {expected}, got {actual}")]
    ConcurrencyConflict {
        aggregate_id: Uuid,
        expected: u64,
        actual: u64,
    },

    /// Event could not be encoded for storage
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Umbrella error for a full command cycle
#[derive(Debug, Error)]
pub enum ProgressionError {
    /// Handler rejected the command
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// History could not be replayed
    #[error("Replay error: {0}")]
    Replay(#[from] ReplayError),

    /// Event log refused the append
    #[error("Event store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for full command cycles
pub type ProgressionResult<T> = Result<T, ProgressionError>;

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
