// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Job record.

use serde::{Deserialize, Serialize};

use crate::types::id::{Address, Digest};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub hash: Digest,
    pub capacity: u128,
    pub worker: Address,
}
