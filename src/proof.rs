// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Replay proofs binding an event log to its final state.

use serde::{Deserialize, Serialize};

use crate::config::{GovernanceConfig, EVENT_LOG_VERSION};
use crate::error::Result;
use crate::event::GovernanceEvent;
use crate::replay_events::{config_hash, journal_hash, replay_events};
use crate::snapshot::blake3::hash_state_blake3;

/// Receipt that a specific event log, replayed from an empty state under a
/// given config, produces a specific final state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GovernanceProof {
    /// Event log schema version.
    pub log_version: u32,

    pub event_count: u64,

    /// BLAKE3 hash of the bincode-encoded config the log was replayed under.
    pub config_hash: [u8; 32],

    /// BLAKE3 hash of the bincode-encoded event log.
    pub journal_hash: [u8; 32],

    /// BLAKE3 hash of the final governance state after replay.
    pub final_state_hash: [u8; 32],
}

impl GovernanceProof {
    /// Replays `events` and binds the log to the resulting state.
    pub fn from_events(config: GovernanceConfig, events: &[GovernanceEvent]) -> Result<Self> {
        let config_hash = config_hash(&config)?;
        let state = replay_events(config, events)?;
        Ok(Self {
            log_version: EVENT_LOG_VERSION,
            event_count: events.len() as u64,
            config_hash,
            journal_hash: journal_hash(events)?,
            final_state_hash: hash_state_blake3(&state),
        })
    }

    /// Re-derives the proof from `events` and compares.
    pub fn verify(&self, config: GovernanceConfig, events: &[GovernanceEvent]) -> Result<bool> {
        Ok(Self::from_events(config, events)? == *self)
    }
}
