//! # qstate-cli — QuorumState Command-Line Interface
//!
//! Operator tooling around the store and its signing scheme.
//!
//! ## Subcommands
//!
//! - `keygen` — Signer key pair generation and derivation
//! - `digest` — Nonce-bound authorization digest computation
//! - `sign` — Digest signing, emitting `(recovery_id, r, s)` triples
//! - `instance` — File-backed store instances: init, show, apply
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to domain crates — no verification or
//!   digest logic is reimplemented here.

use anyhow::bail;
use qstate_core::StateBytes;

pub mod digest;
pub mod instance;
pub mod keygen;
pub mod sign;

/// Resolve a candidate state from the `--state` (UTF-8) / `--state-hex`
/// argument pair shared by several subcommands.
pub fn parse_state_args(utf8: Option<&str>, hex: Option<&str>) -> anyhow::Result<StateBytes> {
    match (utf8, hex) {
        (Some(text), None) => Ok(StateBytes::new(text.as_bytes())),
        (None, Some(hex)) => Ok(StateBytes::from_hex(hex)?),
        (Some(_), Some(_)) => bail!("--state and --state-hex are mutually exclusive"),
        (None, None) => bail!("one of --state or --state-hex is required"),
    }
}
