// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Proposal payload canonicalization.
//!
//! The canonical form of a proposal is the ABI encoding of
//! `(address[] removals, bytes32[] job_hashes, uint256[] job_capacities, address[] workers, uint256 total)`
//! and its hash is Keccak-256 over those bytes. Field order is fixed; any
//! reordering changes the hash.

use serde::{Deserialize, Serialize};
use sha3::{Digest as _, Keccak256};
use tracing::debug;

use crate::codec::abi::{self, Token};
use crate::config::DIGEST_LEN;
use crate::error::{GovernanceError, Result};
use crate::types::id::{Address, Digest};

/// The full body of a proposal, as supplied on create and again on execute.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalPayload {
    pub validators_to_remove: Vec<Address>,
    pub job_hashes: Vec<Digest>,
    pub job_capacities: Vec<u128>,
    pub workers: Vec<Address>,
}

/// Result of canonicalizing a payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalProposal {
    pub bytes: Vec<u8>,
    pub hash: Digest,
    pub total_capacity: u128,
}

impl ProposalPayload {
    pub fn new(
        validators_to_remove: Vec<Address>,
        job_hashes: Vec<Digest>,
        job_capacities: Vec<u128>,
        workers: Vec<Address>,
    ) -> Self {
        Self { validators_to_remove, job_hashes, job_capacities, workers }
    }

    pub fn canonicalize(&self) -> Result<CanonicalProposal> {
        canonicalize(
            &self.validators_to_remove,
            &self.job_hashes,
            &self.job_capacities,
            &self.workers,
        )
    }

    /// Checked sum of all job capacities.
    pub fn total_capacity(&self) -> Result<u128> {
        sum_capacities(&self.job_capacities)
    }

    /// Iterates the jobs this payload creates as (hash, capacity, worker).
    ///
    /// Only meaningful once [`ProposalPayload::check_jobs`] passed.
    pub fn jobs(&self) -> impl Iterator<Item = (Digest, u128, Address)> + '_ {
        self.job_hashes
            .iter()
            .zip(self.job_capacities.iter())
            .zip(self.workers.iter())
            .map(|((h, c), w)| (*h, *c, *w))
    }

    /// Every job hash needs exactly one capacity and one worker to be applied.
    pub fn check_jobs(&self) -> Result<()> {
        if self.job_capacities.len() != self.workers.len() {
            return Err(GovernanceError::LengthMismatch {
                capacities: self.job_capacities.len(),
                workers: self.workers.len(),
            });
        }
        if self.job_hashes.len() != self.job_capacities.len() {
            return Err(GovernanceError::JobCountMismatch {
                hashes: self.job_hashes.len(),
                capacities: self.job_capacities.len(),
            });
        }
        Ok(())
    }
}

fn sum_capacities(capacities: &[u128]) -> Result<u128> {
    capacities
        .iter()
        .try_fold(0u128, |acc, c| acc.checked_add(*c))
        .ok_or(GovernanceError::Overflow)
}

pub fn hash_bytes(bytes: &[u8]) -> Digest {
    let out = Keccak256::digest(bytes);
    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&out);
    Digest(digest)
}

/// Encodes a proposal into its canonical bytes and content hash.
pub fn canonicalize(
    validators_to_remove: &[Address],
    job_hashes: &[Digest],
    job_capacities: &[u128],
    workers: &[Address],
) -> Result<CanonicalProposal> {
    if job_capacities.len() != workers.len() {
        return Err(GovernanceError::LengthMismatch {
            capacities: job_capacities.len(),
            workers: workers.len(),
        });
    }
    let total_capacity = sum_capacities(job_capacities)?;

    let bytes = abi::encode(&[
        Token::Addresses(validators_to_remove),
        Token::Digests(job_hashes),
        Token::Uints(job_capacities),
        Token::Addresses(workers),
        Token::Uint(total_capacity),
    ])?;
    let hash = hash_bytes(&bytes);

    debug!(
        removals = validators_to_remove.len(),
        jobs = job_hashes.len(),
        total_capacity,
        %hash,
        "canonicalized proposal"
    );

    Ok(CanonicalProposal { bytes, hash, total_capacity })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak_empty_input() {
        assert_eq!(
            hash_bytes(&[]).to_hex(),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_jobs_zip_in_order() {
        let payload = ProposalPayload::new(
            vec![],
            vec![Digest([1; 32]), Digest([2; 32])],
            vec![10, 20],
            vec![Address([7; 20]), Address([8; 20])],
        );
        payload.check_jobs().unwrap();
        let jobs: Vec<_> = payload.jobs().collect();
        assert_eq!(jobs[0], (Digest([1; 32]), 10, Address([7; 20])));
        assert_eq!(jobs[1], (Digest([2; 32]), 20, Address([8; 20])));
    }

    #[test]
    fn test_check_jobs_rejects_hash_count_mismatch() {
        let payload = ProposalPayload::new(vec![], vec![Digest([1; 32])], vec![], vec![]);
        assert!(matches!(
            payload.check_jobs(),
            Err(GovernanceError::JobCountMismatch { hashes: 1, capacities: 0 })
        ));
    }
}
