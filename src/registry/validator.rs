// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Validator record.

use serde::{Deserialize, Serialize};

use crate::types::id::{Address, Digest};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub id: Address,
    /// Hash identifying the validator's node, if it registered one.
    pub node_hash: Option<Digest>,
    pub commitment: u128,
    pub active: bool,
}

impl Validator {
    pub fn new(id: Address, node_hash: Option<Digest>, commitment: u128) -> Self {
        Self { id, node_hash, commitment, active: true }
    }
}
