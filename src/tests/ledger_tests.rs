// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::GovernanceError;
use crate::ledger::JobLedger;
use crate::tests::{addr, digest};

#[test]
fn test_add_remove_tracks_total() {
    let mut ledger = JobLedger::new();
    ledger.add_job(digest(1), 1000, addr(1)).unwrap();
    ledger.add_job(digest(2), 500, addr(2)).unwrap();
    assert_eq!(ledger.total_outstanding(), 1500);
    assert_eq!(ledger.len(), 2);

    let job = ledger.remove_job(&digest(1)).unwrap();
    assert_eq!(job.capacity, 1000);
    assert_eq!(job.worker, addr(1));
    assert_eq!(ledger.total_outstanding(), 500);
    ledger.check_invariants().unwrap();
}

#[test]
fn test_duplicate_job() {
    let mut ledger = JobLedger::new();
    ledger.add_job(digest(1), 10, addr(1)).unwrap();
    assert_eq!(ledger.add_job(digest(1), 20, addr(2)), Err(GovernanceError::DuplicateJob(digest(1))));
    assert_eq!(ledger.total_outstanding(), 10);
}

#[test]
fn test_unknown_job() {
    let mut ledger = JobLedger::new();
    assert_eq!(ledger.remove_job(&digest(3)), Err(GovernanceError::UnknownJob(digest(3))));
}

#[test]
fn test_overflow_leaves_ledger_unchanged() {
    let mut ledger = JobLedger::new();
    ledger.add_job(digest(1), u128::MAX, addr(1)).unwrap();
    assert_eq!(ledger.add_job(digest(2), 1, addr(1)), Err(GovernanceError::Overflow));
    assert_eq!(ledger.len(), 1);
    assert!(!ledger.contains(&digest(2)));
    ledger.check_invariants().unwrap();
}

#[test]
fn test_jobs_for_worker() {
    let mut ledger = JobLedger::new();
    ledger.add_job(digest(1), 1, addr(1)).unwrap();
    ledger.add_job(digest(2), 2, addr(2)).unwrap();
    ledger.add_job(digest(3), 3, addr(1)).unwrap();
    let worker = addr(1);
    let hashes: Vec<_> = ledger.jobs_for_worker(&worker).map(|j| j.hash).collect();
    assert_eq!(hashes, vec![digest(1), digest(3)]);
}
