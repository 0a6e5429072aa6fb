// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants and runtime governance parameters.

use serde::{Deserialize, Serialize};

use crate::error::{GovernanceError, GovernanceResult};

/// Size in bytes of a validator / worker identity.
pub const ADDRESS_LEN: usize = 20;

/// Size in bytes of a content digest (proposal and job hashes).
pub const DIGEST_LEN: usize = 32;

/// Size in bytes of one ABI word.
pub const WORD_LEN: usize = 32;

/// Event log file format version.
pub const EVENT_LOG_VERSION: u32 = 1;

/// First sequence number handed out by a fresh proposal store.
pub const FIRST_SEQUENCE: u64 = 1;

/// Default minimum stake a validator must commit (100_000 tokens at 18 decimals).
pub const DEFAULT_MIN_COMMITMENT: u128 = 100_000 * 1_000_000_000_000_000_000;

/// Default throttle between two executed proposals, in seconds.
pub const DEFAULT_MIN_EXECUTION_INTERVAL_SECS: u64 = 60;

/// Rule deciding how many approvals a proposal needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quorum {
    /// Strictly more than half of the active validators.
    Majority,
    /// At least `numerator / denominator` of the active validators, rounded up.
    Fraction { numerator: u32, denominator: u32 },
    /// A fixed approval count, capped at the active validator count.
    Fixed(u32),
}

impl Quorum {
    /// Number of approvals required given `active` validators. Never below one.
    pub fn required(&self, active: usize) -> usize {
        let required = match *self {
            Quorum::Majority => active / 2 + 1,
            Quorum::Fraction { numerator, denominator } => {
                let num = active as u128 * numerator as u128;
                let den = denominator.max(1) as u128;
                ((num + den - 1) / den) as usize
            }
            Quorum::Fixed(count) => (count as usize).min(active),
        };
        required.max(1)
    }
}

impl Default for Quorum {
    fn default() -> Self {
        Quorum::Majority
    }
}

/// What happens to a validator's approvals on pending proposals when it is removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalPolicy {
    /// Historical approvals keep counting toward quorum.
    #[default]
    Retain,
    /// Approvals by the removed validator are stripped from every pending proposal.
    Purge,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernanceConfig {
    pub quorum: Quorum,
    pub min_commitment: u128,
    pub min_execution_interval_secs: u64,
    pub approval_policy: ApprovalPolicy,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            quorum: Quorum::default(),
            min_commitment: DEFAULT_MIN_COMMITMENT,
            min_execution_interval_secs: DEFAULT_MIN_EXECUTION_INTERVAL_SECS,
            approval_policy: ApprovalPolicy::default(),
        }
    }
}

impl GovernanceConfig {
    pub fn from_json_str(raw: &str) -> GovernanceResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| GovernanceError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GovernanceResult<()> {
        match self.quorum {
            Quorum::Fraction { numerator, denominator } => {
                if denominator == 0 || numerator == 0 || numerator > denominator {
                    return Err(GovernanceError::InvalidConfig(format!(
                        "quorum fraction {numerator}/{denominator} must be in (0, 1]"
                    )));
                }
            }
            Quorum::Fixed(0) => {
                return Err(GovernanceError::InvalidConfig(
                    "fixed quorum must require at least one approval".into(),
                ));
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_thresholds() {
        assert_eq!(Quorum::Majority.required(0), 1);
        assert_eq!(Quorum::Majority.required(1), 1);
        assert_eq!(Quorum::Majority.required(2), 2);
        assert_eq!(Quorum::Majority.required(3), 2);
        assert_eq!(Quorum::Majority.required(4), 3);
    }

    #[test]
    fn test_fraction_rounds_up() {
        let two_thirds = Quorum::Fraction { numerator: 2, denominator: 3 };
        assert_eq!(two_thirds.required(3), 2);
        assert_eq!(two_thirds.required(4), 3);
        assert_eq!(two_thirds.required(6), 4);
    }

    #[test]
    fn test_fixed_is_capped_by_active() {
        assert_eq!(Quorum::Fixed(5).required(3), 3);
        assert_eq!(Quorum::Fixed(2).required(3), 2);
    }

    #[test]
    fn test_config_from_json() {
        let raw = r#"{
            "quorum": { "fraction": { "numerator": 2, "denominator": 3 } },
            "min_commitment": 10,
            "min_execution_interval_secs": 5,
            "approval_policy": "purge"
        }"#;
        let config = GovernanceConfig::from_json_str(raw).unwrap();
        assert_eq!(config.quorum, Quorum::Fraction { numerator: 2, denominator: 3 });
        assert_eq!(config.min_commitment, 10);
        assert_eq!(config.approval_policy, ApprovalPolicy::Purge);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GovernanceConfig::from_json_str(r#"{ "min_execution_interval_secs": 0 }"#).unwrap();
        assert_eq!(config.quorum, Quorum::Majority);
        assert_eq!(config.min_commitment, DEFAULT_MIN_COMMITMENT);
        assert_eq!(config.min_execution_interval_secs, 0);
    }

    #[test]
    fn test_rejects_bad_fraction() {
        let raw = r#"{ "quorum": { "fraction": { "numerator": 3, "denominator": 2 } } }"#;
        assert!(GovernanceConfig::from_json_str(raw).is_err());
    }
}
