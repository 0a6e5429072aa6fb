// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use smartnodes_governance::state::Command;

fn describe(command: &Command) -> (Option<u64>, String) {
    match command {
        Command::RegisterValidator { id, commitment, .. } => (None, format!("{id} commits {commitment}")),
        Command::CreateProposal { payload, at } => (
            Some(*at),
            format!(
                "{} removals, {} jobs",
                payload.validators_to_remove.len(),
                payload.job_hashes.len()
            ),
        ),
        Command::ApproveProposal { sequence, validator } => (None, format!("{sequence} by {validator}")),
        Command::ExecuteProposal { sequence, at, .. } => (Some(*at), format!("{sequence}")),
        Command::CompleteJob { hash, caller } => (None, format!("{hash} by {caller}")),
    }
}

pub fn run(log_path: &Path) -> anyhow::Result<()> {
    let log = crate::load_event_log(log_path)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Event", "Timestamp", "Details"]);

    for event in &log.events {
        let (at, details) = describe(&event.command);
        let ts = at
            .map(|t| {
                chrono::DateTime::from_timestamp(t as i64, 0)
                    .unwrap_or_default()
                    .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
            })
            .unwrap_or_default();

        table.add_row(vec![event.index.to_string(), event.event_type().to_string(), ts, details]);
    }

    println!("\nGovernance Timeline\n");
    println!("{table}\n");

    Ok(())
}
