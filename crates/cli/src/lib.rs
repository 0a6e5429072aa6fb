// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod commands;

use std::path::Path;

use anyhow::Context;
use smartnodes_governance::replay_events::EventLogFile;
use smartnodes_governance::GovernanceConfig;

/// Reads and validates an event log file.
pub fn load_event_log(path: &Path) -> anyhow::Result<EventLogFile> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading event log {}", path.display()))?;
    Ok(EventLogFile::from_json(&raw)?)
}

pub fn load_config(path: &Path) -> anyhow::Result<GovernanceConfig> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    Ok(GovernanceConfig::from_json_str(&raw)?)
}
