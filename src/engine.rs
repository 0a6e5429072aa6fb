// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Governance engine.
//!
//! Wraps a [`GovernanceState`] behind a single reader/writer lock. Every
//! mutation takes the write side, stamps the command with the clock, applies
//! it and journals it in one critical section. Reads take the read side and
//! return owned values.

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::clock::{Clock, SystemClock};
use crate::codec::ProposalPayload;
use crate::config::GovernanceConfig;
use crate::error::{GovernanceError, Result};
use crate::event::GovernanceEvent;
use crate::ledger::Job;
use crate::proof::GovernanceProof;
use crate::proposal::Proposal;
use crate::registry::Validator;
use crate::replay_events::{EventJournal, EventLogFile};
use crate::snapshot::blake3::hash_state_blake3;
use crate::state::command::{Applied, Command, ExecutionReceipt};
use crate::state::governance::GovernanceState;
use crate::state::view::MultisigState;
use crate::types::id::{Address, Digest, SequenceNumber, Timestamp};

struct Inner {
    state: GovernanceState,
    journal: EventJournal,
}

pub struct GovernanceEngine<C: Clock = SystemClock> {
    inner: RwLock<Inner>,
    clock: C,
}

impl GovernanceEngine<SystemClock> {
    pub fn new(config: GovernanceConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> GovernanceEngine<C> {
    pub fn with_clock(config: GovernanceConfig, clock: C) -> Result<Self> {
        config.validate()?;
        info!(?config, "initializing governance engine");
        Ok(Self {
            inner: RwLock::new(Inner {
                state: GovernanceState::new(config),
                journal: EventJournal::new(),
            }),
            clock,
        })
    }

    /// Builds an engine whose registry is seeded with `genesis` validators.
    pub fn with_genesis(config: GovernanceConfig, clock: C, genesis: &[(Address, u128)]) -> Result<Self> {
        let engine = Self::with_clock(config, clock)?;
        for (id, commitment) in genesis {
            engine.register_validator(*id, None, *commitment)?;
        }
        Ok(engine)
    }

    /// Rebuilds an engine from a previously exported event log.
    pub fn from_event_log(log: &EventLogFile, clock: C) -> Result<Self> {
        let state = log.replay()?;
        let mut journal = EventJournal::new();
        for event in &log.events {
            journal.record(event.command.clone());
        }
        info!(events = journal.len(), "governance engine restored from event log");
        Ok(Self { inner: RwLock::new(Inner { state, journal }), clock })
    }

    fn commit(&self, build: impl FnOnce(Timestamp) -> Command) -> Result<Applied> {
        let mut inner = self.inner.write();
        let command = build(self.clock.now());
        let applied = inner.state.apply(&command)?;
        inner.journal.record(command);
        Ok(applied)
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    // --- Operations ---

    pub fn register_validator(&self, id: Address, node_hash: Option<Digest>, commitment: u128) -> Result<()> {
        self.commit(|_| Command::RegisterValidator { id, node_hash, commitment })?;
        Ok(())
    }

    pub fn create_proposal(&self, payload: &ProposalPayload) -> Result<SequenceNumber> {
        match self.commit(|at| Command::CreateProposal { payload: payload.clone(), at })? {
            Applied::Created(sequence) => Ok(sequence),
            other => Err(unexpected(other)),
        }
    }

    /// Approves `sequence` on behalf of `caller`. Returns the approval count.
    pub fn approve_proposal(&self, sequence: SequenceNumber, caller: Address) -> Result<usize> {
        match self.commit(|_| Command::ApproveProposal { sequence, validator: caller })? {
            Applied::Approved { approvals, .. } => Ok(approvals),
            other => Err(unexpected(other)),
        }
    }

    pub fn execute_proposal(&self, sequence: SequenceNumber, payload: &ProposalPayload) -> Result<ExecutionReceipt> {
        match self.commit(|at| Command::ExecuteProposal { sequence, payload: payload.clone(), at }) {
            Ok(Applied::Executed(receipt)) => Ok(receipt),
            Ok(other) => Err(unexpected(other)),
            Err(e) => {
                warn!(%sequence, error = %e, "proposal execution rejected");
                Err(e)
            }
        }
    }

    /// Removes a finished job. Only the job's assigned worker may complete it.
    pub fn complete_job(&self, hash: Digest, caller: Address) -> Result<Job> {
        match self.commit(|_| Command::CompleteJob { hash, caller })? {
            Applied::JobCompleted(job) => Ok(job),
            other => Err(unexpected(other)),
        }
    }

    // --- Read APIs ---

    pub fn active_count(&self) -> usize {
        self.inner.read().state.registry().active_count()
    }

    pub fn is_validator(&self, id: &Address) -> bool {
        self.inner.read().state.registry().is_active(id)
    }

    pub fn validator(&self, id: &Address) -> Option<Validator> {
        self.inner.read().state.validator(id).copied()
    }

    pub fn active_validators(&self) -> Vec<Validator> {
        self.inner.read().state.registry().iter_active().copied().collect()
    }

    pub fn total_outstanding(&self) -> u128 {
        self.inner.read().state.ledger().total_outstanding()
    }

    pub fn job(&self, hash: &Digest) -> Option<Job> {
        self.inner.read().state.job(hash).copied()
    }

    pub fn jobs_for_worker(&self, worker: &Address) -> Vec<Job> {
        self.inner.read().state.ledger().jobs_for_worker(worker).copied().collect()
    }

    pub fn proposal(&self, sequence: SequenceNumber) -> Option<Proposal> {
        self.inner.read().state.proposal(sequence).cloned()
    }

    pub fn quorum_reached(&self, sequence: SequenceNumber) -> Result<bool> {
        let inner = self.inner.read();
        inner.state.proposals().quorum_reached(sequence, inner.state.registry())
    }

    pub fn multisig_state(&self) -> MultisigState {
        self.inner.read().state.multisig_state()
    }

    /// Time of the last executed proposal, if any.
    pub fn last_proposal_time(&self) -> Option<Timestamp> {
        self.inner.read().state.last_executed_at()
    }

    /// Consistent copy of the whole state.
    pub fn snapshot(&self) -> GovernanceState {
        self.inner.read().state.clone()
    }

    pub fn state_hash(&self) -> [u8; 32] {
        hash_state_blake3(&self.inner.read().state)
    }

    pub fn events(&self) -> Vec<GovernanceEvent> {
        self.inner.read().journal.events().to_vec()
    }

    pub fn export_event_log(&self) -> EventLogFile {
        let inner = self.inner.read();
        EventLogFile::new(inner.state.config().clone(), inner.journal.events().to_vec())
    }

    pub fn proof(&self) -> Result<GovernanceProof> {
        let inner = self.inner.read();
        GovernanceProof::from_events(inner.state.config().clone(), inner.journal.events())
    }
}

fn unexpected(applied: Applied) -> GovernanceError {
    GovernanceError::InvariantViolation(format!("unexpected command outcome {applied:?}"))
}
