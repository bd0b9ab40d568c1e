//! # Instance Subcommand
//!
//! File-backed store instances: a `QuorumStore` persisted as a JSON
//! document. `init` creates one, `show` prints its observable fields, and
//! `apply` attempts an authorized transition — the document is rewritten
//! only when the transition commits.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Subcommand};

use qstate_core::{hexstr, ValidatorAddress};
use qstate_crypto::SignatureTriple;
use qstate_store::QuorumStore;

use crate::parse_state_args;

/// Arguments for the instance subcommand.
#[derive(Args, Debug)]
pub struct InstanceArgs {
    /// Instance operation to perform.
    #[command(subcommand)]
    pub command: InstanceCommand,
}

/// Operations on a file-backed instance document.
#[derive(Subcommand, Debug)]
pub enum InstanceCommand {
    /// Create a new instance document.
    Init {
        /// Validator address, repeatable, in registry order.
        #[arg(long = "validator", required = true)]
        validators: Vec<String>,

        /// Initial state as a UTF-8 string.
        #[arg(long)]
        state: Option<String>,

        /// Initial state as hex bytes.
        #[arg(long)]
        state_hex: Option<String>,

        /// Opaque deployment parameter (hex), carried uninterpreted.
        #[arg(long, default_value = "0x")]
        reserved: String,

        /// Path to write the instance document to.
        #[arg(long)]
        out: PathBuf,
    },

    /// Print the observable fields of an instance document.
    Show {
        /// Path of the instance document.
        #[arg(long)]
        file: PathBuf,
    },

    /// Apply an authorized transition and persist the result.
    Apply {
        /// Path of the instance document.
        #[arg(long)]
        file: PathBuf,

        /// Candidate state as a UTF-8 string.
        #[arg(long)]
        state: Option<String>,

        /// Candidate state as hex bytes.
        #[arg(long)]
        state_hex: Option<String>,

        /// Signature triple as `v:r:s` (v decimal, r/s hex), repeatable,
        /// in registry order.
        #[arg(long = "signature", required = true)]
        signatures: Vec<String>,
    },
}

/// Dispatch an instance operation.
pub fn run(args: InstanceArgs) -> anyhow::Result<()> {
    match args.command {
        InstanceCommand::Init {
            validators,
            state,
            state_hex,
            reserved,
            out,
        } => init(&validators, state.as_deref(), state_hex.as_deref(), &reserved, &out),
        InstanceCommand::Show { file } => show(&file),
        InstanceCommand::Apply {
            file,
            state,
            state_hex,
            signatures,
        } => apply(&file, state.as_deref(), state_hex.as_deref(), &signatures),
    }
}

fn init(
    validators: &[String],
    state: Option<&str>,
    state_hex: Option<&str>,
    reserved: &str,
    out: &Path,
) -> anyhow::Result<()> {
    let validators = validators
        .iter()
        .map(|hex| ValidatorAddress::from_hex(hex))
        .collect::<Result<Vec<_>, _>>()?;
    let initial_state = parse_state_args(state, state_hex)?;
    let reserved = hexstr::decode(reserved)?;

    let store = QuorumStore::new(validators, reserved, initial_state)?;
    write_document(out, &store)?;
    tracing::info!(path = %out.display(), "instance document written");
    println!("initialized instance at {}", out.display());
    Ok(())
}

fn show(file: &Path) -> anyhow::Result<()> {
    let store = read_document(file)?;
    println!("nonce:      {}", store.nonce());
    println!("state:      {}", store.state());
    println!("validators:");
    for validator in store.validators() {
        println!("  {validator}");
    }
    Ok(())
}

fn apply(
    file: &Path,
    state: Option<&str>,
    state_hex: Option<&str>,
    signatures: &[String],
) -> anyhow::Result<()> {
    let mut store = read_document(file)?;
    let candidate = parse_state_args(state, state_hex)?;
    let signatures = signatures
        .iter()
        .map(|entry| parse_triple(entry))
        .collect::<Result<Vec<_>, _>>()?;

    store
        .set_state(candidate, &signatures)
        .context("transition rejected; instance document left unchanged")?;

    write_document(file, &store)?;
    tracing::info!(path = %file.display(), nonce = store.nonce().value(), "transition committed");
    println!("committed; nonce is now {}", store.nonce());
    Ok(())
}

/// Parse a `v:r:s` signature triple (v decimal, r/s 32-byte hex).
pub fn parse_triple(entry: &str) -> anyhow::Result<SignatureTriple> {
    let mut parts = entry.splitn(3, ':');
    let (Some(v), Some(r), Some(s)) = (parts.next(), parts.next(), parts.next()) else {
        bail!("signature must be v:r:s, got {entry:?}");
    };
    let recovery_id: u8 = v
        .trim()
        .parse()
        .with_context(|| format!("invalid recovery id {v:?}"))?;
    let r = hexstr::decode_fixed::<32>(r)?;
    let s = hexstr::decode_fixed::<32>(s)?;
    Ok(SignatureTriple::new(recovery_id, r, s))
}

fn read_document(path: &Path) -> anyhow::Result<QuorumStore> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading instance document {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing instance document {}", path.display()))
}

fn write_document(path: &Path, store: &QuorumStore) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    std::fs::write(path, json)
        .with_context(|| format!("writing instance document {}", path.display()))
}
