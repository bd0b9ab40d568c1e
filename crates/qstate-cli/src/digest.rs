//! # Digest Subcommand
//!
//! Computes the nonce-bound authorization digest that validators must sign
//! to approve a candidate state. The nonce must be the target instance's
//! CURRENT counter value.

use clap::Args;

use qstate_core::TransitionNonce;
use qstate_crypto::transition_digest;

use crate::parse_state_args;

/// Arguments for the digest subcommand.
#[derive(Args, Debug)]
pub struct DigestArgs {
    /// Candidate state as a UTF-8 string.
    #[arg(long)]
    pub state: Option<String>,

    /// Candidate state as hex bytes.
    #[arg(long)]
    pub state_hex: Option<String>,

    /// The current counter value of the target instance.
    #[arg(long)]
    pub nonce: u64,
}

/// Compute and print the authorization digest.
pub fn run(args: DigestArgs) -> anyhow::Result<()> {
    let state = parse_state_args(args.state.as_deref(), args.state_hex.as_deref())?;
    let digest = transition_digest(state.as_bytes(), TransitionNonce::new(args.nonce));
    println!("{digest}");
    Ok(())
}
