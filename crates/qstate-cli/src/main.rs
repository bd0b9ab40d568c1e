//! # qstate CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// QuorumState CLI — validator-authorized state store toolchain.
///
/// Generates signer keys, computes and signs nonce-bound authorization
/// digests, and manages file-backed store instances.
#[derive(Parser, Debug)]
#[command(name = "qstate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate or re-derive a signer key pair.
    Keygen(qstate_cli::keygen::KeygenArgs),
    /// Compute the nonce-bound authorization digest for a candidate state.
    Digest(qstate_cli::digest::DigestArgs),
    /// Sign an authorization digest.
    Sign(qstate_cli::sign::SignArgs),
    /// Create, inspect, and transition file-backed store instances.
    Instance(qstate_cli::instance::InstanceArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Keygen(args) => qstate_cli::keygen::run(args),
        Commands::Digest(args) => qstate_cli::digest::run(args),
        Commands::Sign(args) => qstate_cli::sign::run(args),
        Commands::Instance(args) => qstate_cli::instance::run(args),
    }
}
