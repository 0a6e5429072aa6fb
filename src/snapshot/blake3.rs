// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Canonical BLAKE3 Hashing
//!
//! BLAKE3 is the state and journal hash used for proofs. Proposal content
//! hashes are Keccak-256 (see `codec`) and are unrelated.
//!
//! # Guarantee
//! Same state → same hash, on any architecture.

use crate::state::governance::GovernanceState;

fn update_opt_u64(hasher: &mut blake3::Hasher, val: Option<u64>) {
    match val {
        Some(v) => {
            hasher.update(&[1]);
            hasher.update(&v.to_le_bytes());
        }
        None => {
            hasher.update(&[0]);
        }
    }
}

/// Compute BLAKE3 hash of governance state.
///
/// # Hash Input Structure
/// ```text
/// version (u64 LE)
/// last_executed_at (tag u8, then u64 LE if present)
/// ↓
/// validator count (u64 LE), then for each validator (address order):
///   address (20) | active (u8) | commitment (u128 LE) | node hash (tag u8, then 32)
/// ↓
/// next sequence (u64 LE), proposal count (u64 LE), then for each proposal (sequence order):
///   sequence (u64 LE) | hash (32) | created_at (u64 LE) | executed_at (tag, u64 LE)
///   approval count (u64 LE) | approvers (20 each, address order)
/// ↓
/// outstanding (u128 LE), job count (u64 LE), then for each job (hash order):
///   hash (32) | capacity (u128 LE) | worker (20)
/// ```
pub fn hash_state_blake3(state: &GovernanceState) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();

    hasher.update(&state.version.0.to_le_bytes());
    update_opt_u64(&mut hasher, state.last_executed_at);

    // Validators
    hasher.update(&(state.registry.len() as u64).to_le_bytes());
    for v in state.registry.iter() {
        hasher.update(v.id.as_bytes());
        hasher.update(&[v.active as u8]);
        hasher.update(&v.commitment.to_le_bytes());
        match v.node_hash {
            Some(h) => {
                hasher.update(&[1]);
                hasher.update(h.as_bytes());
            }
            None => {
                hasher.update(&[0]);
            }
        }
    }

    // Proposals
    hasher.update(&state.proposals.next_sequence().0.to_le_bytes());
    hasher.update(&(state.proposals.len() as u64).to_le_bytes());
    for p in state.proposals.iter() {
        hasher.update(&p.sequence.0.to_le_bytes());
        hasher.update(p.hash.as_bytes());
        hasher.update(&p.created_at.to_le_bytes());
        update_opt_u64(&mut hasher, p.executed_at);
        hasher.update(&(p.approvals.len() as u64).to_le_bytes());
        for approver in &p.approvals {
            hasher.update(approver.as_bytes());
        }
    }

    // Jobs
    hasher.update(&state.ledger.total_outstanding().to_le_bytes());
    hasher.update(&(state.ledger.len() as u64).to_le_bytes());
    for job in state.ledger.iter() {
        hasher.update(job.hash.as_bytes());
        hasher.update(&job.capacity.to_le_bytes());
        hasher.update(job.worker.as_bytes());
    }

    *hasher.finalize().as_bytes()
}

/// Compute BLAKE3 hash of a byte slice.
pub fn hash_bytes(data: &[u8]) -> [u8; 32] {
    *blake3::hash(data).as_bytes()
}
