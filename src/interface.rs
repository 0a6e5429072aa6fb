// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Stable operation contract.
//!
//! Hosts program against `dyn Governance` so the implementation behind it can
//! be replaced (upgraded) without touching callers.

use crate::clock::Clock;
use crate::codec::ProposalPayload;
use crate::engine::GovernanceEngine;
use crate::error::Result;
use crate::ledger::Job;
use crate::state::command::ExecutionReceipt;
use crate::state::view::MultisigState;
use crate::types::id::{Address, Digest, SequenceNumber};

pub trait Governance: Send + Sync {
    fn register_validator(&self, id: Address, node_hash: Option<Digest>, commitment: u128) -> Result<()>;
    fn create_proposal(&self, payload: &ProposalPayload) -> Result<SequenceNumber>;
    fn approve_proposal(&self, sequence: SequenceNumber, caller: Address) -> Result<usize>;
    fn execute_proposal(&self, sequence: SequenceNumber, payload: &ProposalPayload) -> Result<ExecutionReceipt>;
    fn complete_job(&self, hash: Digest, caller: Address) -> Result<Job>;

    fn active_count(&self) -> usize;
    fn total_outstanding(&self) -> u128;
    fn multisig_state(&self) -> MultisigState;
}

impl<C: Clock> Governance for GovernanceEngine<C> {
    fn register_validator(&self, id: Address, node_hash: Option<Digest>, commitment: u128) -> Result<()> {
        GovernanceEngine::register_validator(self, id, node_hash, commitment)
    }

    fn create_proposal(&self, payload: &ProposalPayload) -> Result<SequenceNumber> {
        GovernanceEngine::create_proposal(self, payload)
    }

    fn approve_proposal(&self, sequence: SequenceNumber, caller: Address) -> Result<usize> {
        GovernanceEngine::approve_proposal(self, sequence, caller)
    }

    fn execute_proposal(&self, sequence: SequenceNumber, payload: &ProposalPayload) -> Result<ExecutionReceipt> {
        GovernanceEngine::execute_proposal(self, sequence, payload)
    }

    fn complete_job(&self, hash: Digest, caller: Address) -> Result<Job> {
        GovernanceEngine::complete_job(self, hash, caller)
    }

    fn active_count(&self) -> usize {
        GovernanceEngine::active_count(self)
    }

    fn total_outstanding(&self) -> u128 {
        GovernanceEngine::total_outstanding(self)
    }

    fn multisig_state(&self) -> MultisigState {
        GovernanceEngine::multisig_state(self)
    }
}
