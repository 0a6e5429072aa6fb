// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::Quorum;
use crate::error::GovernanceError;
use crate::proposal::ProposalStore;
use crate::registry::ValidatorRegistry;
use crate::tests::{addr, digest};
use crate::types::enums::ProposalStatus;
use crate::types::id::SequenceNumber;

fn registry(n: u8) -> ValidatorRegistry {
    let mut registry = ValidatorRegistry::new(0);
    for i in 1..=n {
        registry.add(addr(i), 1).unwrap();
    }
    registry
}

#[test]
fn test_sequence_numbers_start_at_one() {
    let mut store = ProposalStore::new(Quorum::Majority);
    assert_eq!(store.submit(digest(1), 10).unwrap(), SequenceNumber(1));
    assert_eq!(store.submit(digest(2), 11).unwrap(), SequenceNumber(2));
    assert_eq!(store.next_sequence(), SequenceNumber(3));

    let p = store.get(SequenceNumber(1)).unwrap();
    assert_eq!(p.created_at, 10);
    assert_eq!(p.status(), ProposalStatus::Pending);
    assert!(p.approvals.is_empty());
}

#[test]
fn test_duplicate_pending_hash() {
    let mut store = ProposalStore::new(Quorum::Majority);
    store.submit(digest(1), 0).unwrap();
    assert_eq!(store.submit(digest(1), 0), Err(GovernanceError::DuplicatePendingProposal(digest(1))));
}

#[test]
fn test_same_hash_allowed_after_execution() {
    let mut store = ProposalStore::new(Quorum::Majority);
    let seq = store.submit(digest(1), 0).unwrap();
    store.seal(seq, 5).unwrap();
    assert_eq!(store.submit(digest(1), 6).unwrap(), SequenceNumber(2));
}

#[test]
fn test_approve_errors() {
    let mut store = ProposalStore::new(Quorum::Majority);
    assert_eq!(
        store.approve(SequenceNumber(1), addr(1)),
        Err(GovernanceError::UnknownProposal(SequenceNumber(1)))
    );

    let seq = store.submit(digest(1), 0).unwrap();
    assert_eq!(store.approve(seq, addr(1)), Ok(1));
    assert_eq!(
        store.approve(seq, addr(1)),
        Err(GovernanceError::DuplicateApproval { sequence: seq, validator: addr(1) })
    );

    store.seal(seq, 1).unwrap();
    assert_eq!(store.approve(seq, addr(2)), Err(GovernanceError::AlreadyExecuted(seq)));
}

#[test]
fn test_seal_twice() {
    let mut store = ProposalStore::new(Quorum::Majority);
    let seq = store.submit(digest(1), 0).unwrap();
    store.seal(seq, 1).unwrap();
    assert_eq!(store.seal(seq, 2), Err(GovernanceError::AlreadyExecuted(seq)));
    assert_eq!(store.get(seq).unwrap().executed_at, Some(1));
}

#[test]
fn test_quorum_uses_current_registry() {
    let mut store = ProposalStore::new(Quorum::Majority);
    let seq = store.submit(digest(1), 0).unwrap();
    store.approve(seq, addr(1)).unwrap();
    store.approve(seq, addr(2)).unwrap();

    let mut reg = registry(3);
    assert!(store.quorum_reached(seq, &reg).unwrap());

    reg.add(addr(4), 1).unwrap();
    reg.add(addr(5), 1).unwrap();
    assert_eq!(store.quorum_status(seq, &reg).unwrap(), (2, 3));
    assert!(!store.quorum_reached(seq, &reg).unwrap());
}

#[test]
fn test_purge_only_touches_pending() {
    let mut store = ProposalStore::new(Quorum::Majority);
    let executed = store.submit(digest(1), 0).unwrap();
    let pending = store.submit(digest(2), 0).unwrap();
    store.approve(executed, addr(1)).unwrap();
    store.approve(pending, addr(1)).unwrap();
    store.seal(executed, 1).unwrap();

    assert_eq!(store.purge_approvals(&addr(1)), 1);
    assert_eq!(store.get(executed).unwrap().approval_count(), 1);
    assert_eq!(store.get(pending).unwrap().approval_count(), 0);
}
