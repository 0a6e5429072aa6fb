// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use smartnodes_governance::proof::GovernanceProof;
use smartnodes_governance::replay_events::replay_events;
use smartnodes_governance::snapshot::blake3::hash_state_blake3;
use smartnodes_governance::state::GovernanceState;

/// Replays the log (under `config_path` if given, else the log's own config).
pub fn replay(log_path: &Path, config_path: Option<&Path>) -> anyhow::Result<(GovernanceState, GovernanceProof)> {
    let log = crate::load_event_log(log_path)?;
    let config = match config_path {
        Some(path) => crate::load_config(path)?,
        None => log.config.clone(),
    };

    tracing::info!(events = log.events.len(), "replaying event log");
    let state = replay_events(config.clone(), &log.events)?;
    state.check_invariants()?;
    let proof = GovernanceProof::from_events(config, &log.events)?;
    Ok((state, proof))
}

pub fn run(log_path: &Path, config_path: Option<&Path>, proof_out: Option<&Path>) -> anyhow::Result<()> {
    let (state, proof) = replay(log_path, config_path)?;
    let view = state.multisig_state();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Field", "Value"]);

    let last = view
        .last_executed_at
        .map(|t| {
            chrono::DateTime::from_timestamp(t as i64, 0)
                .unwrap_or_default()
                .to_rfc3339()
        })
        .unwrap_or_else(|| "never".to_string());
    let pending: Vec<String> = view.pending.iter().map(|s| s.to_string()).collect();

    table.add_row(vec!["Active Validators".to_string(), view.active_validators.to_string()]);
    table.add_row(vec!["Required Approvals".to_string(), view.required_approvals.to_string()]);
    table.add_row(vec!["Next Proposal".to_string(), view.next_sequence.to_string()]);
    table.add_row(vec!["Pending".to_string(), pending.join(", ")]);
    table.add_row(vec!["Last Execution".to_string(), last]);
    table.add_row(vec!["Outstanding Capacity".to_string(), view.total_outstanding.to_string()]);
    table.add_row(vec!["Jobs".to_string(), view.job_count.to_string()]);

    println!("\nMultisig State\n");
    println!("{table}\n");
    println!("State Hash:   {}", hex::encode(hash_state_blake3(&state)));
    println!("Journal Hash: {}\n", hex::encode(proof.journal_hash));

    if let Some(path) = proof_out {
        std::fs::write(path, serde_json::to_string_pretty(&proof)?)?;
        println!("Proof written to {}\n", path.display());
    }
    Ok(())
}
