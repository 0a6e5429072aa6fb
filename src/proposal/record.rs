// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Proposal record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::enums::ProposalStatus;
use crate::types::id::{Address, Digest, SequenceNumber, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub sequence: SequenceNumber,
    pub hash: Digest,
    pub approvals: BTreeSet<Address>,
    pub created_at: Timestamp,
    /// Set once the proposal is sealed.
    pub executed_at: Option<Timestamp>,
}

impl Proposal {
    pub fn new(sequence: SequenceNumber, hash: Digest, created_at: Timestamp) -> Self {
        Self {
            sequence,
            hash,
            approvals: BTreeSet::new(),
            created_at,
            executed_at: None,
        }
    }

    pub fn status(&self) -> ProposalStatus {
        if self.executed_at.is_some() {
            ProposalStatus::Executed
        } else {
            ProposalStatus::Pending
        }
    }

    pub fn is_executed(&self) -> bool {
        self.executed_at.is_some()
    }

    pub fn approval_count(&self) -> usize {
        self.approvals.len()
    }
}
