// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;

use anyhow::Context;
use smartnodes_governance::codec::CanonicalProposal;
use smartnodes_governance::ProposalPayload;

pub fn compute(payload_path: &Path) -> anyhow::Result<CanonicalProposal> {
    let raw = std::fs::read_to_string(payload_path)
        .with_context(|| format!("reading payload {}", payload_path.display()))?;
    let payload: ProposalPayload = serde_json::from_str(&raw).context("parsing proposal payload")?;
    Ok(payload.canonicalize()?)
}

pub fn run(payload_path: &Path, show_bytes: bool) -> anyhow::Result<()> {
    let canonical = compute(payload_path)?;

    println!("\nProposal Hash:  {}", canonical.hash);
    println!("Total Capacity: {}", canonical.total_capacity);
    println!("Encoded Size:   {} bytes\n", canonical.bytes.len());

    if show_bytes {
        for word in canonical.bytes.chunks(32) {
            println!("  {}", hex::encode(word));
        }
        println!();
    }
    Ok(())
}
