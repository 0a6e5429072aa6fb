// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Job ledger.
//!
//! # Invariant
//! `total_outstanding()` always equals the sum of capacities of the jobs in the ledger.

pub mod job;

use std::collections::BTreeMap;

use crate::error::{GovernanceError, Result};
use crate::types::id::{Address, Digest};

pub use job::Job;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobLedger {
    jobs: BTreeMap<Digest, Job>,
    outstanding: u128,
}

impl JobLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_job(&mut self, hash: Digest, capacity: u128, worker: Address) -> Result<()> {
        if self.jobs.contains_key(&hash) {
            return Err(GovernanceError::DuplicateJob(hash));
        }
        let outstanding = self.outstanding.checked_add(capacity).ok_or(GovernanceError::Overflow)?;
        self.jobs.insert(hash, Job { hash, capacity, worker });
        self.outstanding = outstanding;
        Ok(())
    }

    pub fn remove_job(&mut self, hash: &Digest) -> Result<Job> {
        let job = self.jobs.remove(hash).ok_or(GovernanceError::UnknownJob(*hash))?;
        // Every capacity in the map was added to `outstanding`, so this cannot underflow.
        self.outstanding -= job.capacity;
        Ok(job)
    }

    pub fn total_outstanding(&self) -> u128 {
        self.outstanding
    }

    pub fn get(&self, hash: &Digest) -> Option<&Job> {
        self.jobs.get(hash)
    }

    pub fn contains(&self, hash: &Digest) -> bool {
        self.jobs.contains_key(hash)
    }

    /// Jobs in hash order.
    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    pub fn jobs_for_worker<'a>(&'a self, worker: &'a Address) -> impl Iterator<Item = &'a Job> + 'a {
        self.jobs.values().filter(move |j| &j.worker == worker)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Recomputes the outstanding total from scratch and compares it with the running total.
    pub fn check_invariants(&self) -> Result<()> {
        let recomputed = self
            .jobs
            .values()
            .try_fold(0u128, |acc, j| acc.checked_add(j.capacity))
            .ok_or(GovernanceError::Overflow)?;
        if recomputed != self.outstanding {
            return Err(GovernanceError::InvariantViolation(format!(
                "outstanding capacity {} does not match recomputed {}",
                self.outstanding, recomputed
            )));
        }
        Ok(())
    }
}
