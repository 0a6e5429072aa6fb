// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Read-only summary of the multisig.

use serde::{Deserialize, Serialize};

use crate::types::id::{SequenceNumber, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigState {
    pub active_validators: usize,
    pub required_approvals: usize,
    pub next_sequence: SequenceNumber,
    pub pending: Vec<SequenceNumber>,
    pub last_executed_at: Option<Timestamp>,
    pub total_outstanding: u128,
    pub job_count: usize,
}
