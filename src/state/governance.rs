// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Governance state definition.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::codec::ProposalPayload;
use crate::config::{ApprovalPolicy, GovernanceConfig};
use crate::error::{GovernanceError, Result};
use crate::ledger::{Job, JobLedger};
use crate::proposal::{Proposal, ProposalStore};
use crate::registry::{Validator, ValidatorRegistry};
use crate::state::command::{Applied, Command, ExecutionReceipt};
use crate::state::view::MultisigState;
use crate::types::id::{Address, Digest, SequenceNumber, Timestamp, Version};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GovernanceState {
    pub(crate) config: GovernanceConfig,
    pub(crate) version: Version,
    pub(crate) registry: ValidatorRegistry,
    pub(crate) proposals: ProposalStore,
    pub(crate) ledger: JobLedger,
    pub(crate) last_executed_at: Option<Timestamp>,
}

impl GovernanceState {
    pub fn new(config: GovernanceConfig) -> Self {
        Self {
            registry: ValidatorRegistry::new(config.min_commitment),
            proposals: ProposalStore::new(config.quorum),
            ledger: JobLedger::new(),
            version: Version(0),
            last_executed_at: None,
            config,
        }
    }

    // --- Read APIs ---

    pub fn config(&self) -> &GovernanceConfig {
        &self.config
    }

    pub fn version(&self) -> u64 {
        self.version.0
    }

    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    pub fn proposals(&self) -> &ProposalStore {
        &self.proposals
    }

    pub fn ledger(&self) -> &JobLedger {
        &self.ledger
    }

    pub fn validator(&self, id: &Address) -> Option<&Validator> {
        self.registry.get(id)
    }

    pub fn proposal(&self, sequence: SequenceNumber) -> Option<&Proposal> {
        self.proposals.get(sequence)
    }

    pub fn job(&self, hash: &Digest) -> Option<&Job> {
        self.ledger.get(hash)
    }

    pub fn last_executed_at(&self) -> Option<Timestamp> {
        self.last_executed_at
    }

    pub fn multisig_state(&self) -> MultisigState {
        let active = self.registry.active_count();
        MultisigState {
            active_validators: active,
            required_approvals: self.proposals.quorum().required(active),
            next_sequence: self.proposals.next_sequence(),
            pending: self.proposals.pending().map(|p| p.sequence).collect(),
            last_executed_at: self.last_executed_at,
            total_outstanding: self.ledger.total_outstanding(),
            job_count: self.ledger.len(),
        }
    }

    // --- Write Logic ---

    /// Applies one command. On error the state is left exactly as it was.
    pub fn apply(&mut self, cmd: &Command) -> Result<Applied> {
        let applied = match cmd {
            Command::RegisterValidator { id, node_hash, commitment } => {
                self.registry.add_with_node(*id, *node_hash, *commitment)?;
                info!(validator = %id, commitment, "validator registered");
                Applied::Registered(*id)
            }
            Command::CreateProposal { payload, at } => {
                payload.check_jobs()?;
                let canonical = payload.canonicalize()?;
                let sequence = self.proposals.submit(canonical.hash, *at)?;
                info!(%sequence, hash = %canonical.hash, "proposal created");
                Applied::Created(sequence)
            }
            Command::ApproveProposal { sequence, validator } => {
                if !self.registry.is_active(validator) {
                    return Err(GovernanceError::NotAuthorized(*validator));
                }
                let approvals = self.proposals.approve(*sequence, *validator)?;
                info!(%sequence, %validator, approvals, "proposal approved");
                Applied::Approved { sequence: *sequence, approvals }
            }
            Command::ExecuteProposal { sequence, payload, at } => {
                let receipt = self.execute(*sequence, payload, *at)?;
                info!(
                    %sequence,
                    removed = receipt.removed_validators.len(),
                    jobs = receipt.jobs_added,
                    outstanding = self.ledger.total_outstanding(),
                    "proposal executed"
                );
                Applied::Executed(receipt)
            }
            Command::CompleteJob { hash, caller } => {
                let job = self.ledger.get(hash).ok_or(GovernanceError::UnknownJob(*hash))?;
                if job.worker != *caller {
                    return Err(GovernanceError::NotJobWorker { caller: *caller, job: *hash });
                }
                let job = self.ledger.remove_job(hash)?;
                info!(job = %hash, worker = %caller, capacity = job.capacity, "job completed");
                Applied::JobCompleted(job)
            }
        };

        self.version = self.version.next();
        Ok(applied)
    }

    fn execute(&mut self, sequence: SequenceNumber, payload: &ProposalPayload, at: Timestamp) -> Result<ExecutionReceipt> {
        let proposal = self.proposals.get(sequence).ok_or(GovernanceError::UnknownProposal(sequence))?;
        if proposal.is_executed() {
            return Err(GovernanceError::AlreadyExecuted(sequence));
        }
        let stored = proposal.hash;

        let canonical = payload.canonicalize()?;
        if canonical.hash != stored {
            return Err(GovernanceError::HashMismatch { stored, computed: canonical.hash });
        }

        let (approvals, required) = self.proposals.quorum_status(sequence, &self.registry)?;
        if approvals < required {
            return Err(GovernanceError::QuorumNotMet { approvals, required });
        }

        if let Some(last) = self.last_executed_at {
            let interval = self.config.min_execution_interval_secs;
            let elapsed = at.saturating_sub(last);
            if elapsed < interval {
                return Err(GovernanceError::TooSoon { remaining_secs: interval - elapsed });
            }
        }

        payload.check_jobs()?;
        self.check_effects(payload, canonical.total_capacity)?;

        // Infallible from here on. Sealed before the purge so the executing
        // proposal keeps its own approvals.
        self.proposals.seal(sequence, at)?;
        self.last_executed_at = Some(at);

        for id in &payload.validators_to_remove {
            self.registry.remove(id)?;
            if self.config.approval_policy == ApprovalPolicy::Purge {
                let purged = self.proposals.purge_approvals(id);
                debug!(validator = %id, purged, "purged approvals of removed validator");
            }
        }

        for (hash, capacity, worker) in payload.jobs() {
            self.ledger.add_job(hash, capacity, worker)?;
        }

        Ok(ExecutionReceipt {
            sequence,
            hash: stored,
            removed_validators: payload.validators_to_remove.clone(),
            jobs_added: payload.job_hashes.len(),
            capacity_added: canonical.total_capacity,
            executed_at: at,
        })
    }

    /// Validates every registry and ledger effect of `payload` without applying any.
    fn check_effects(&self, payload: &ProposalPayload, total_capacity: u128) -> Result<()> {
        let mut removing = BTreeSet::new();
        for id in &payload.validators_to_remove {
            if !self.registry.is_active(id) || !removing.insert(*id) {
                return Err(GovernanceError::NotRegistered(*id));
            }
        }

        let mut adding = BTreeSet::new();
        for hash in &payload.job_hashes {
            if self.ledger.contains(hash) || !adding.insert(*hash) {
                return Err(GovernanceError::DuplicateJob(*hash));
            }
        }

        self.ledger
            .total_outstanding()
            .checked_add(total_capacity)
            .ok_or(GovernanceError::Overflow)?;
        Ok(())
    }

    // --- Invariant Checker ---

    /// Checks the internal consistency of the governance state.
    pub fn check_invariants(&self) -> Result<()> {
        self.ledger.check_invariants()?;

        for proposal in self.proposals.iter() {
            if proposal.sequence >= self.proposals.next_sequence() {
                return Err(GovernanceError::InvariantViolation(format!(
                    "proposal {} not below next sequence {}",
                    proposal.sequence,
                    self.proposals.next_sequence()
                )));
            }
            if let (Some(executed), Some(last)) = (proposal.executed_at, self.last_executed_at) {
                if executed > last {
                    return Err(GovernanceError::InvariantViolation(format!(
                        "proposal {} executed after last execution time",
                        proposal.sequence
                    )));
                }
            }
        }

        let mut pending_hashes: Vec<Digest> = self.proposals.pending().map(|p| p.hash).collect();
        let before = pending_hashes.len();
        pending_hashes.sort();
        pending_hashes.dedup();
        if pending_hashes.len() != before {
            return Err(GovernanceError::InvariantViolation("duplicate pending proposal hash".into()));
        }

        Ok(())
    }
}
