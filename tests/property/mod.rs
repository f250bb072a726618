// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! - `numbering`: append-only defendant numbering
//! - `replay_determinism`: replay is a pure left fold
//! - `notification_replay`: identity binding and replay over notification histories

mod notification_replay;
mod numbering;
