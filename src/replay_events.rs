// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Event Replay Infrastructure
//!
//! # Guarantees
//! - Same config + same event log => same final state and state hash
//! - Replay applies events with the timestamps they were committed with
//! - A log that fails to replay is rejected as a whole

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{GovernanceConfig, EVENT_LOG_VERSION};
use crate::error::{GovernanceError, Result};
use crate::event::GovernanceEvent;
use crate::snapshot::blake3::hash_bytes;
use crate::state::command::Command;
use crate::state::governance::GovernanceState;

/// Append-only log of committed events.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventJournal {
    committed: Vec<GovernanceEvent>,
}

impl EventJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a command that has already been applied. Returns its index.
    pub fn record(&mut self, command: Command) -> u64 {
        let index = self.committed.len() as u64;
        self.committed.push(GovernanceEvent { index, command });
        index
    }

    pub fn events(&self) -> &[GovernanceEvent] {
        &self.committed
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

/// BLAKE3 over the bincode encoding of the events, in order.
pub fn journal_hash(events: &[GovernanceEvent]) -> Result<[u8; 32]> {
    let bytes = bincode::serde::encode_to_vec(events, bincode::config::standard())
        .map_err(|e| GovernanceError::InvalidInput(format!("event encoding failed: {e}")))?;
    Ok(hash_bytes(&bytes))
}

/// BLAKE3 over the bincode encoding of the config a log is replayed under.
pub fn config_hash(config: &GovernanceConfig) -> Result<[u8; 32]> {
    let bytes = bincode::serde::encode_to_vec(config, bincode::config::standard())
        .map_err(|e| GovernanceError::InvalidInput(format!("config encoding failed: {e}")))?;
    Ok(hash_bytes(&bytes))
}

/// Canonical event log file.
///
/// Schema changes require a version bump.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EventLogFile {
    pub version: u32,
    pub config: GovernanceConfig,
    pub events: Vec<GovernanceEvent>,
}

impl EventLogFile {
    pub fn new(config: GovernanceConfig, events: Vec<GovernanceEvent>) -> Self {
        Self { version: EVENT_LOG_VERSION, config, events }
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != EVENT_LOG_VERSION {
            return Err(GovernanceError::InvalidInput(format!(
                "unsupported event log version {}",
                self.version
            )));
        }
        self.config.validate()?;
        for (expected, event) in self.events.iter().enumerate() {
            if event.index != expected as u64 {
                return Err(GovernanceError::InvalidInput(format!(
                    "event index {} out of order, expected {}",
                    event.index, expected
                )));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| GovernanceError::InvalidInput(e.to_string()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let file: Self = serde_json::from_str(raw).map_err(|e| GovernanceError::InvalidInput(e.to_string()))?;
        file.validate()?;
        Ok(file)
    }

    pub fn replay(&self) -> Result<GovernanceState> {
        self.validate()?;
        replay_events(self.config.clone(), &self.events)
    }
}

/// Replays events on a fresh state built from `config`.
pub fn replay_events(config: GovernanceConfig, events: &[GovernanceEvent]) -> Result<GovernanceState> {
    let mut state = GovernanceState::new(config);
    for event in events {
        debug!(index = event.index, kind = event.event_type(), "replaying event");
        state.apply(&event.command)?;
    }
    Ok(state)
}
