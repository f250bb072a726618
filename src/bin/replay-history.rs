// Copyright (c) 2025 - Cowboy AI, Inc.
//! Replay History Tool
//!
//! Reads a JSON-lines file of stored event records, replays them into the
//! named aggregate and prints the resulting state as pretty JSON.
//!
//! Run with: cargo run --bin replay-history -- <aggregate-type> <path.jsonl>
//!
//! Aggregate types: hearing, prosecution_case, notification, court_document,
//! material, court_application
//!
//! Replay strictness comes from PROGRESSION_VERIFY_AGGREGATE_ID and
//! PROGRESSION_REJECT_FUTURE_VERSIONS.

use anyhow::{bail, Context, Result};
use court_progression::{
    Aggregate, AggregateRoot, CourtApplicationState, CourtDocumentState, EngineConfig,
    EventRecord, HearingState, MaterialState, NotificationState, ProsecutionCaseState,
    UpcasterRegistry,
};
use std::path::Path;
use tracing::{debug, info};

const USAGE: &str = "usage: replay-history <aggregate-type> <path.jsonl>";

/// Parse one `EventRecord` per non-blank line
fn read_records(path: &Path) -> Result<Vec<EventRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("Invalid event record on line {}", index + 1))
        })
        .collect()
}

/// Replay records into aggregate `A` and render its state
fn replay_as<A: Aggregate>(records: &[EventRecord], config: EngineConfig) -> Result<String> {
    let upcasters = UpcasterRegistry::standard();
    let root = AggregateRoot::<A>::load_records(records, &upcasters, config)
        .with_context(|| format!("Failed to replay {} history", A::AGGREGATE_TYPE))?;

    info!(
        aggregate_type = A::AGGREGATE_TYPE,
        version = root.version(),
        "Replay complete"
    );

    serde_json::to_string_pretty(root.state()).context("Failed to render state")
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(aggregate_type), Some(path)) = (args.next(), args.next()) else {
        bail!(USAGE);
    };

    let config = EngineConfig::from_env();
    debug!(?config, "Configuration loaded");

    let records = read_records(Path::new(&path))?;
    info!(records = records.len(), path = %path, "Loaded history");

    let rendered = match aggregate_type.as_str() {
        HearingState::AGGREGATE_TYPE => replay_as::<HearingState>(&records, config)?,
        ProsecutionCaseState::AGGREGATE_TYPE => {
            replay_as::<ProsecutionCaseState>(&records, config)?
        }
        NotificationState::AGGREGATE_TYPE => replay_as::<NotificationState>(&records, config)?,
        CourtDocumentState::AGGREGATE_TYPE => replay_as::<CourtDocumentState>(&records, config)?,
        MaterialState::AGGREGATE_TYPE => replay_as::<MaterialState>(&records, config)?,
        CourtApplicationState::AGGREGATE_TYPE => {
            replay_as::<CourtApplicationState>(&records, config)?
        }
        other => bail!("Unknown aggregate type '{}'\n{}", other, USAGE),
    };

    println!("{}", rendered);
    Ok(())
}
