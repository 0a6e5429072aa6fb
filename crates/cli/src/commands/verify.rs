// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;

use anyhow::{bail, Context};
use smartnodes_governance::proof::GovernanceProof;

/// Recomputes the proof under `config_path` (or the log's own config) and compares.
pub fn run(log_path: &Path, proof_path: &Path, config_path: Option<&Path>) -> anyhow::Result<()> {
    let log = crate::load_event_log(log_path)?;
    let config = match config_path {
        Some(path) => crate::load_config(path)?,
        None => log.config.clone(),
    };
    let raw = std::fs::read_to_string(proof_path)
        .with_context(|| format!("reading proof {}", proof_path.display()))?;
    let expected: GovernanceProof = serde_json::from_str(&raw).context("parsing proof")?;

    let found = GovernanceProof::from_events(config, &log.events)?;

    if found == expected {
        println!("\n✅ VERIFIED\n");
        println!("State Hash:   {}", hex::encode(found.final_state_hash));
        println!("Events:       {}\n", found.event_count);
        Ok(())
    } else {
        println!("\n❌ MISMATCH\n");
        println!("Expected State: {}", hex::encode(expected.final_state_hash));
        println!("Found State:    {}", hex::encode(found.final_state_hash));
        if found.config_hash != expected.config_hash {
            println!("Config differs from the one the proof was made under");
        }
        println!();
        bail!("proof does not match event log {}", log_path.display())
    }
}
