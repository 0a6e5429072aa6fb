// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Governance command definitions.
//!
//! A command carries every input its application depends on, including the
//! timestamp it is applied at, so a log of commands replays to the same state.

use serde::{Deserialize, Serialize};

use crate::codec::ProposalPayload;
use crate::ledger::Job;
use crate::types::id::{Address, Digest, SequenceNumber, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    RegisterValidator {
        id: Address,
        node_hash: Option<Digest>,
        commitment: u128,
    },
    CreateProposal {
        payload: ProposalPayload,
        at: Timestamp,
    },
    ApproveProposal {
        sequence: SequenceNumber,
        validator: Address,
    },
    ExecuteProposal {
        sequence: SequenceNumber,
        payload: ProposalPayload,
        at: Timestamp,
    },
    CompleteJob {
        hash: Digest,
        caller: Address,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::RegisterValidator { .. } => "RegisterValidator",
            Command::CreateProposal { .. } => "CreateProposal",
            Command::ApproveProposal { .. } => "ApproveProposal",
            Command::ExecuteProposal { .. } => "ExecuteProposal",
            Command::CompleteJob { .. } => "CompleteJob",
        }
    }
}

/// Effects of a successfully executed proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReceipt {
    pub sequence: SequenceNumber,
    pub hash: Digest,
    pub removed_validators: Vec<Address>,
    pub jobs_added: usize,
    pub capacity_added: u128,
    pub executed_at: Timestamp,
}

/// What a successfully applied command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    Registered(Address),
    Created(SequenceNumber),
    Approved { sequence: SequenceNumber, approvals: usize },
    Executed(ExecutionReceipt),
    JobCompleted(Job),
}
