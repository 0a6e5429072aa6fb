// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Lifecycle enums.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ProposalStatus {
    Pending = 0,
    Executed = 1,
}

impl Default for ProposalStatus {
    fn default() -> Self {
        ProposalStatus::Pending
    }
}
