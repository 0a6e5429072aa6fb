// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use clap::{Parser, Subcommand};
use smartnodes_cli::commands::{hash, replay, timeline, verify};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "smartnodes")]
#[command(about = "Smartnodes governance tool - proposal hashing and event log replay", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the canonical hash of a proposal payload (JSON)
    Hash {
        #[arg(long = "payload")]
        payload_path: PathBuf,

        /// Print the ABI-encoded payload, one word per line
        #[arg(long)]
        bytes: bool,
    },
    /// Replay an event log and print the resulting multisig state
    Replay {
        #[arg(long = "log")]
        log_path: PathBuf,

        /// Governance config (JSON) overriding the one stored in the log
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Write the resulting proof to this path
        #[arg(long)]
        proof_out: Option<PathBuf>,
    },
    /// List the events of a log
    Timeline {
        #[arg(long = "log")]
        log_path: PathBuf,
    },
    /// Check an event log against a previously written proof
    Verify {
        #[arg(long = "log")]
        log_path: PathBuf,
        #[arg(long = "proof")]
        proof_path: PathBuf,

        /// Governance config (JSON) the proof was produced under
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "smartnodes_governance=info,smartnodes_cli=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Hash { payload_path, bytes } => hash::run(&payload_path, bytes),
        Commands::Replay {
            log_path,
            config,
            proof_out,
        } => replay::run(&log_path, config.as_deref(), proof_out.as_deref()),
        Commands::Timeline { log_path } => timeline::run(&log_path),
        Commands::Verify {
            log_path,
            proof_path,
            config,
        } => verify::run(&log_path, &proof_path, config.as_deref()),
    }
}
