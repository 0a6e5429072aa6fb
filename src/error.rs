// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

use crate::types::id::{Address, Digest, SequenceNumber};

/// Coarse classification of a failure, used by hosts to map errors to operator responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: mismatched lengths, overflow, bad config.
    Validation,
    /// Caller is not allowed to perform the action.
    Authorization,
    /// Duplicate, unknown or already-executed entity.
    State,
    /// Execution payload does not match the committed hash.
    Integrity,
    /// Execution attempted before the throttle interval elapsed.
    Throttle,
    /// Not enough approvals.
    Quorum,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("length mismatch: {capacities} job capacities for {workers} workers")]
    LengthMismatch { capacities: usize, workers: usize },

    #[error("{hashes} job hashes for {capacities} job capacities")]
    JobCountMismatch { hashes: usize, capacities: usize },

    #[error("capacity overflow")]
    Overflow,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} is not an active validator")]
    NotAuthorized(Address),

    #[error("{caller} is not the worker assigned to job {job}")]
    NotJobWorker { caller: Address, job: Digest },

    #[error("validator {0} is already registered")]
    AlreadyRegistered(Address),

    #[error("commitment {provided} below required minimum {minimum}")]
    InsufficientCommitment { provided: u128, minimum: u128 },

    #[error("validator {0} is not registered")]
    NotRegistered(Address),

    #[error("a pending proposal with hash {0} already exists")]
    DuplicatePendingProposal(Digest),

    #[error("unknown proposal {0}")]
    UnknownProposal(SequenceNumber),

    #[error("proposal {0} was already executed")]
    AlreadyExecuted(SequenceNumber),

    #[error("{validator} already approved proposal {sequence}")]
    DuplicateApproval { sequence: SequenceNumber, validator: Address },

    #[error("job {0} already exists")]
    DuplicateJob(Digest),

    #[error("unknown job {0}")]
    UnknownJob(Digest),

    #[error("payload hash {computed} does not match proposal hash {stored}")]
    HashMismatch { stored: Digest, computed: Digest },

    #[error("state invariant violated: {0}")]
    InvariantViolation(String),

    #[error("quorum not met: {approvals} of {required} approvals")]
    QuorumNotMet { approvals: usize, required: usize },

    #[error("execution too soon: {remaining_secs}s remaining")]
    TooSoon { remaining_secs: u64 },
}

impl GovernanceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GovernanceError::LengthMismatch { .. }
            | GovernanceError::JobCountMismatch { .. }
            | GovernanceError::Overflow
            | GovernanceError::InvalidConfig(_)
            | GovernanceError::InvalidInput(_)
            | GovernanceError::InsufficientCommitment { .. } => ErrorKind::Validation,
            GovernanceError::NotAuthorized(_) | GovernanceError::NotJobWorker { .. } => {
                ErrorKind::Authorization
            }
            GovernanceError::AlreadyRegistered(_)
            | GovernanceError::NotRegistered(_)
            | GovernanceError::DuplicatePendingProposal(_)
            | GovernanceError::UnknownProposal(_)
            | GovernanceError::AlreadyExecuted(_)
            | GovernanceError::DuplicateApproval { .. }
            | GovernanceError::DuplicateJob(_)
            | GovernanceError::UnknownJob(_) => ErrorKind::State,
            GovernanceError::HashMismatch { .. } | GovernanceError::InvariantViolation(_) => {
                ErrorKind::Integrity
            }
            GovernanceError::QuorumNotMet { .. } => ErrorKind::Quorum,
            GovernanceError::TooSoon { .. } => ErrorKind::Throttle,
        }
    }
}

pub type GovernanceResult<T> = core::result::Result<T, GovernanceError>;
pub type Result<T> = GovernanceResult<T>;
