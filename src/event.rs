// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Journaled governance events.
//!
//! Every committed state transition is recorded as a `GovernanceEvent`: the
//! command that was applied and its position in the log. Rejected commands
//! are never journaled.
//!
//! # Invariants
//! - Same event log => same final state
//! - Events are immutable once committed
//! - `index` is dense and starts at 0

use serde::{Deserialize, Serialize};

use crate::state::command::Command;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GovernanceEvent {
    pub index: u64,
    pub command: Command,
}

impl GovernanceEvent {
    pub fn event_type(&self) -> &'static str {
        self.command.name()
    }
}
