// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Proposal store.
//!
//! Proposals are keyed by a monotonically increasing sequence number starting
//! at 1. A proposal moves from `Pending` to `Executed` exactly once and is
//! immutable afterwards.

pub mod record;

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::{Quorum, FIRST_SEQUENCE};
use crate::error::{GovernanceError, Result};
use crate::registry::ValidatorRegistry;
use crate::types::id::{Address, Digest, SequenceNumber, Timestamp};

pub use record::Proposal;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProposalStore {
    proposals: BTreeMap<SequenceNumber, Proposal>,
    next: SequenceNumber,
    quorum: Quorum,
}

impl ProposalStore {
    pub fn new(quorum: Quorum) -> Self {
        Self {
            proposals: BTreeMap::new(),
            next: SequenceNumber(FIRST_SEQUENCE),
            quorum,
        }
    }

    pub fn quorum(&self) -> Quorum {
        self.quorum
    }

    /// Sequence number the next submission will receive.
    pub fn next_sequence(&self) -> SequenceNumber {
        self.next
    }

    pub fn submit(&mut self, hash: Digest, now: Timestamp) -> Result<SequenceNumber> {
        if self.pending().any(|p| p.hash == hash) {
            return Err(GovernanceError::DuplicatePendingProposal(hash));
        }
        let sequence = self.next;
        self.proposals.insert(sequence, Proposal::new(sequence, hash, now));
        self.next = sequence.next();
        Ok(sequence)
    }

    /// Records an approval and returns the new approval count.
    pub fn approve(&mut self, sequence: SequenceNumber, validator: Address) -> Result<usize> {
        let proposal = self
            .proposals
            .get_mut(&sequence)
            .ok_or(GovernanceError::UnknownProposal(sequence))?;
        if proposal.is_executed() {
            return Err(GovernanceError::AlreadyExecuted(sequence));
        }
        if !proposal.approvals.insert(validator) {
            return Err(GovernanceError::DuplicateApproval { sequence, validator });
        }
        Ok(proposal.approval_count())
    }

    /// Returns `(approvals, required)` measured against the registry as it is now.
    pub fn quorum_status(&self, sequence: SequenceNumber, registry: &ValidatorRegistry) -> Result<(usize, usize)> {
        let proposal = self.get(sequence).ok_or(GovernanceError::UnknownProposal(sequence))?;
        let required = self.quorum.required(registry.active_count());
        debug!(%sequence, approvals = proposal.approval_count(), required, "quorum check");
        Ok((proposal.approval_count(), required))
    }

    pub fn quorum_reached(&self, sequence: SequenceNumber, registry: &ValidatorRegistry) -> Result<bool> {
        let (approvals, required) = self.quorum_status(sequence, registry)?;
        Ok(approvals >= required)
    }

    pub fn seal(&mut self, sequence: SequenceNumber, now: Timestamp) -> Result<()> {
        let proposal = self
            .proposals
            .get_mut(&sequence)
            .ok_or(GovernanceError::UnknownProposal(sequence))?;
        if proposal.is_executed() {
            return Err(GovernanceError::AlreadyExecuted(sequence));
        }
        proposal.executed_at = Some(now);
        Ok(())
    }

    /// Strips `validator`'s approvals from every pending proposal. Returns how many were removed.
    pub fn purge_approvals(&mut self, validator: &Address) -> usize {
        let mut purged = 0;
        for proposal in self.proposals.values_mut() {
            if !proposal.is_executed() && proposal.approvals.remove(validator) {
                purged += 1;
            }
        }
        purged
    }

    pub fn get(&self, sequence: SequenceNumber) -> Option<&Proposal> {
        self.proposals.get(&sequence)
    }

    pub fn pending(&self) -> impl Iterator<Item = &Proposal> {
        self.proposals.values().filter(|p| !p.is_executed())
    }

    /// All proposals in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &Proposal> {
        self.proposals.values()
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}
