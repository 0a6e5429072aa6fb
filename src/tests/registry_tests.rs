// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::GovernanceError;
use crate::registry::ValidatorRegistry;
use crate::tests::{addr, digest};

#[test]
fn test_add_and_count() {
    let mut registry = ValidatorRegistry::new(100);
    registry.add(addr(1), 100).unwrap();
    registry.add_with_node(addr(2), Some(digest(7)), 500).unwrap();

    assert_eq!(registry.active_count(), 2);
    assert!(registry.is_active(&addr(1)));
    assert_eq!(registry.get(&addr(2)).unwrap().node_hash, Some(digest(7)));
    assert_eq!(registry.get(&addr(2)).unwrap().commitment, 500);
}

#[test]
fn test_duplicate_add_rejected() {
    let mut registry = ValidatorRegistry::new(0);
    registry.add(addr(1), 1).unwrap();
    assert_eq!(registry.add(addr(1), 1), Err(GovernanceError::AlreadyRegistered(addr(1))));
}

#[test]
fn test_commitment_minimum() {
    let mut registry = ValidatorRegistry::new(100);
    assert_eq!(
        registry.add(addr(1), 99),
        Err(GovernanceError::InsufficientCommitment { provided: 99, minimum: 100 })
    );
    assert_eq!(registry.active_count(), 0);
    assert!(registry.is_empty());
}

#[test]
fn test_remove_deactivates_and_keeps_record() {
    let mut registry = ValidatorRegistry::new(0);
    registry.add(addr(1), 5).unwrap();
    registry.add(addr(2), 5).unwrap();

    let removed = registry.remove(&addr(1)).unwrap();
    assert!(removed.active);
    assert_eq!(registry.active_count(), 1);
    assert!(!registry.is_active(&addr(1)));
    assert!(!registry.get(&addr(1)).unwrap().active);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_remove_unknown_or_inactive() {
    let mut registry = ValidatorRegistry::new(0);
    assert_eq!(registry.remove(&addr(9)), Err(GovernanceError::NotRegistered(addr(9))));
    registry.add(addr(1), 5).unwrap();
    registry.remove(&addr(1)).unwrap();
    assert_eq!(registry.remove(&addr(1)), Err(GovernanceError::NotRegistered(addr(1))));
}

#[test]
fn test_removed_validator_can_register_again() {
    let mut registry = ValidatorRegistry::new(0);
    registry.add(addr(1), 5).unwrap();
    registry.remove(&addr(1)).unwrap();
    registry.add(addr(1), 8).unwrap();
    assert!(registry.is_active(&addr(1)));
    assert_eq!(registry.get(&addr(1)).unwrap().commitment, 8);
}
