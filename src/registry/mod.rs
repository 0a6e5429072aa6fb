// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Validator registry.
//!
//! Holds every validator ever registered. Removal deactivates the record
//! instead of dropping it, so `validator()` still answers for former members
//! and a removed validator may register again.

pub mod validator;

use std::collections::BTreeMap;

use crate::error::{GovernanceError, Result};
use crate::types::id::{Address, Digest};

pub use validator::Validator;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidatorRegistry {
    validators: BTreeMap<Address, Validator>,
    min_commitment: u128,
}

impl ValidatorRegistry {
    pub fn new(min_commitment: u128) -> Self {
        Self { validators: BTreeMap::new(), min_commitment }
    }

    pub fn min_commitment(&self) -> u128 {
        self.min_commitment
    }

    pub fn add(&mut self, id: Address, commitment: u128) -> Result<()> {
        self.add_with_node(id, None, commitment)
    }

    /// Registers `id`, or reactivates it if it was previously removed.
    pub fn add_with_node(&mut self, id: Address, node_hash: Option<Digest>, commitment: u128) -> Result<()> {
        if self.is_active(&id) {
            return Err(GovernanceError::AlreadyRegistered(id));
        }
        if commitment < self.min_commitment {
            return Err(GovernanceError::InsufficientCommitment {
                provided: commitment,
                minimum: self.min_commitment,
            });
        }
        self.validators.insert(id, Validator::new(id, node_hash, commitment));
        Ok(())
    }

    /// Deactivates `id`, returning its record as it was before removal.
    pub fn remove(&mut self, id: &Address) -> Result<Validator> {
        match self.validators.get_mut(id) {
            Some(v) if v.active => {
                let before = *v;
                v.active = false;
                Ok(before)
            }
            _ => Err(GovernanceError::NotRegistered(*id)),
        }
    }

    pub fn get(&self, id: &Address) -> Option<&Validator> {
        self.validators.get(id)
    }

    pub fn is_active(&self, id: &Address) -> bool {
        self.validators.get(id).map_or(false, |v| v.active)
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }

    /// Active validators in address order.
    pub fn iter_active(&self) -> impl Iterator<Item = &Validator> {
        self.validators.values().filter(|v| v.active)
    }

    /// All validators, active or not, in address order.
    pub fn iter(&self) -> impl Iterator<Item = &Validator> {
        self.validators.values()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}
