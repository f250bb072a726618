// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Versioning Infrastructure
//!
//! Provides upcasting support for event schema evolution. When the payload of
//! an event kind changes, an upcaster transforms stored payloads of the old
//! version into the current one on read.
//!
//! # Design Principles
//!
//! 1. **Upcasting on Read**: stored records are never rewritten
//! 2. **Application Sees Latest Only**: fold functions only handle current payloads
//! 3. **Chain of Upcasters**: v1 → v2 → v3 migrations compose per kind
//!
//! # Architecture
//!
//! ```text
//! EventRecord (kind, version, payload) → UpcasterRegistry → decode → fold
//!                                             ↓
//!                                   V1 → V2 → V3 (chain per kind)
//! ```
//!
//! Upcasting migrates a payload within one kind. Versioned *kinds*
//! (`CaseReferredToCourtV2`) are a separate mechanism: they are chosen by the
//! handler and never upcast into each other.

use std::fmt;

use crate::events::record::EventRecord;

/// Error type for upcasting operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpcastError {
    /// No chain of upcasters reaches the requested version
    UnsupportedVersion { kind: String, from: u32, to: u32 },

    /// JSON transformation failed
    TransformationFailed(String),

    /// Missing required field in old version
    MissingField(String),

    /// Invalid field value that cannot be migrated
    InvalidFieldValue { field: String, reason: String },
}

impl fmt::Display for UpcastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpcastError::UnsupportedVersion { kind, from, to } => {
                write!(
                    f,
                    "No upcaster path for '{}' from version {} to version {}",
                    kind, from, to
                )
            }
            UpcastError::TransformationFailed(msg) => {
                write!(f, "Event transformation failed: {}", msg)
            }
            UpcastError::MissingField(field) => {
                write!(f, "Required field '{}' missing after upcast", field)
            }
            UpcastError::InvalidFieldValue { field, reason } => {
                write!(f, "Invalid value in field '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for UpcastError {}

/// Migrates the payload of one event kind from one version to the next
pub trait Upcaster: Send + Sync {
    /// Event kind this upcaster applies to
    fn kind(&self) -> &str;

    /// Version this upcaster expects as input
    fn from_version(&self) -> u32;

    /// Version this upcaster produces as output
    fn to_version(&self) -> u32;

    /// Transform the payload from the old version to the new one
    fn upcast(&self, payload: serde_json::Value) -> Result<serde_json::Value, UpcastError>;

    /// Optional: verify invariants after upcasting
    fn validate(&self, _payload: &serde_json::Value) -> Result<(), UpcastError> {
        Ok(())
    }
}

/// Upcasters for every kind, applied in registration order
///
/// # Example
///
/// ```rust
/// use court_progression::events::hearing::HearingNoteAuthorUpcaster;
/// use court_progression::events::versioning::UpcasterRegistry;
///
/// let registry = UpcasterRegistry::new().with(HearingNoteAuthorUpcaster);
/// assert_eq!(registry.latest_version("hearing_note_added"), Some(2));
/// ```
#[derive(Default)]
pub struct UpcasterRegistry {
    upcasters: Vec<Box<dyn Upcaster>>,
}

impl UpcasterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every upcaster this crate ships
    pub fn standard() -> Self {
        Self::new().with(crate::events::hearing::HearingNoteAuthorUpcaster)
    }

    /// Add an upcaster
    ///
    /// Upcasters for the same kind should be added in version order.
    pub fn add<U: Upcaster + 'static>(&mut self, upcaster: U) {
        self.upcasters.push(Box::new(upcaster));
    }

    /// Builder form of [`add`](Self::add)
    pub fn with<U: Upcaster + 'static>(mut self, upcaster: U) -> Self {
        self.add(upcaster);
        self
    }

    /// Highest version any registered upcaster produces for a kind
    pub fn latest_version(&self, kind: &str) -> Option<u32> {
        self.upcasters
            .iter()
            .filter(|u| u.kind() == kind)
            .map(|u| u.to_version())
            .max()
    }

    /// Upcast a record's payload to `target_version`
    ///
    /// A record already at the target is returned unchanged.
    pub fn upcast_record(
        &self,
        mut record: EventRecord,
        target_version: u32,
    ) -> Result<EventRecord, UpcastError> {
        let unsupported = |record: &EventRecord| UpcastError::UnsupportedVersion {
            kind: record.kind.clone(),
            from: record.event_version,
            to: target_version,
        };

        if record.event_version > target_version {
            return Err(unsupported(&record));
        }

        let kind = record.kind.clone();
        for upcaster in self.upcasters.iter().filter(|u| u.kind() == kind) {
            if record.event_version == target_version {
                break;
            }
            if record.event_version == upcaster.from_version() {
                let payload = upcaster.upcast(record.payload)?;
                upcaster.validate(&payload)?;
                record.payload = payload;
                record.event_version = upcaster.to_version();
            }
        }

        if record.event_version != target_version {
            return Err(unsupported(&record));
        }

        Ok(record)
    }
}

impl fmt::Debug for UpcasterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps: Vec<String> = self
            .upcasters
            .iter()
            .map(|u| format!("{}:v{}->v{}", u.kind(), u.from_version(), u.to_version()))
            .collect();
        f.debug_struct("UpcasterRegistry").field("upcasters", &steps).finish()
    }
}
