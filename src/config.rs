// Copyright (c) 2025 - Cowboy AI, Inc.
//! Engine configuration
//!
//! Settings that govern how strictly stored histories are replayed. Values
//! come from the environment with safe defaults:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PROGRESSION_VERIFY_AGGREGATE_ID` | `true` |
//! | `PROGRESSION_REJECT_FUTURE_VERSIONS` | `true` |

use tracing::warn;

/// Replay strictness settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Reject histories containing events addressed to another aggregate
    pub verify_aggregate_id: bool,

    /// Reject records whose version is newer than the latest known schema
    pub reject_future_versions: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            verify_aggregate_id: true,
            reject_future_versions: true,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            verify_aggregate_id: env_flag(
                "PROGRESSION_VERIFY_AGGREGATE_ID",
                defaults.verify_aggregate_id,
            ),
            reject_future_versions: env_flag(
                "PROGRESSION_REJECT_FUTURE_VERSIONS",
                defaults.reject_future_versions,
            ),
        }
    }

    /// Disable the aggregate identity check
    pub fn without_aggregate_id_check(mut self) -> Self {
        self.verify_aggregate_id = false;
        self
    }

    /// Attempt to decode records newer than the latest known version
    pub fn allow_future_versions(mut self) -> Self {
        self.reject_future_versions = false;
        self
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(raw) => parse_flag(&raw).unwrap_or_else(|| {
            warn!("Ignoring unparseable value '{}' for {}, using {}", raw, name, default);
            default
        }),
        Err(_) => default,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
