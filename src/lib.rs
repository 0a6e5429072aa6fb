// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! smartnodes-governance: a deterministic validator multisig and job ledger.
//!
//! Proposals commit to a Keccak-256 hash of their ABI-encoded payload,
//! collect approvals from active validators and, once quorum is reached and
//! the execution throttle allows it, atomically remove validators and open
//! jobs.

pub mod config;
pub mod error;
pub mod types;
pub mod clock;
pub mod codec;
pub mod registry;
pub mod ledger;
pub mod proposal;
pub mod state;
pub mod event;
pub mod replay_events;
pub mod snapshot;
pub mod proof;
pub mod engine;
pub mod interface;

pub use codec::{canonicalize, ProposalPayload};
pub use config::{ApprovalPolicy, GovernanceConfig, Quorum};
pub use engine::GovernanceEngine;
pub use error::{ErrorKind, GovernanceError, GovernanceResult};
pub use interface::Governance;
pub use types::{Address, Digest, SequenceNumber, Timestamp};

#[cfg(test)]
pub mod tests;
