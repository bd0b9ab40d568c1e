//! # Sign Subcommand
//!
//! Signs an authorization digest with a signer's secret key, emitting the
//! `(recovery_id, r, s)` triple as JSON. The digest can be supplied
//! directly, or computed in place from a candidate state and nonce.

use anyhow::bail;
use clap::Args;

use qstate_core::{Digest, TransitionNonce};
use qstate_crypto::{transition_digest, SignerKeyPair};

use crate::parse_state_args;

/// Arguments for the sign subcommand.
#[derive(Args, Debug)]
pub struct SignArgs {
    /// Signer secret key (hex).
    #[arg(long)]
    pub key: String,

    /// Sign this 32-byte digest directly (hex).
    #[arg(long, conflicts_with_all = ["state", "state_hex", "nonce"])]
    pub digest: Option<String>,

    /// Candidate state as a UTF-8 string.
    #[arg(long)]
    pub state: Option<String>,

    /// Candidate state as hex bytes.
    #[arg(long)]
    pub state_hex: Option<String>,

    /// The current counter value of the target instance.
    #[arg(long)]
    pub nonce: Option<u64>,
}

/// Sign the requested digest and print the signature triple as JSON.
pub fn run(args: SignArgs) -> anyhow::Result<()> {
    let keypair = SignerKeyPair::from_secret_hex(&args.key)?;

    let digest = match &args.digest {
        Some(hex) => Digest::from_hex(hex)?,
        None => {
            let state = parse_state_args(args.state.as_deref(), args.state_hex.as_deref())?;
            let Some(nonce) = args.nonce else {
                bail!("--nonce is required when signing a candidate state");
            };
            transition_digest(state.as_bytes(), TransitionNonce::new(nonce))
        }
    };

    let triple = keypair.sign(&digest);
    println!("{}", serde_json::to_string_pretty(&triple)?);
    Ok(())
}
