pub mod registry_tests;
pub mod ledger_tests;
pub mod proposal_tests;

use crate::config::{ApprovalPolicy, GovernanceConfig, Quorum};
use crate::types::id::{Address, Digest};

pub(crate) fn addr(n: u8) -> Address {
    Address([n; 20])
}

pub(crate) fn digest(n: u8) -> Digest {
    Digest([n; 32])
}

pub(crate) fn test_config() -> GovernanceConfig {
    GovernanceConfig {
        quorum: Quorum::Majority,
        min_commitment: 100,
        min_execution_interval_secs: 60,
        approval_policy: ApprovalPolicy::Retain,
    }
}
