//! # Authorization Digest Binding
//!
//! Derives the exact digest validators must sign to authorize replacing the
//! current state with a candidate state. Binding the transition counter into
//! the digest is what defeats replay: a signature set produced for counter
//! value `k` stops verifying the moment the counter advances to `k + 1`,
//! because the digest itself changes.
//!
//! ## Construction
//!
//! ```text
//! inner = keccak256(candidate_state)
//! bound = keccak256(inner || be32(nonce))
//! ```
//!
//! where `be32(nonce)` is the 32-byte big-endian counter encoding. This is
//! the bit-exact contract external signing tooling must reproduce.

use qstate_core::{Digest, TransitionNonce};

use crate::keccak::keccak256;

/// Compute the digest that authorizes replacing the current state with
/// `candidate_state` at counter value `nonce`.
///
/// Pure and side-effect-free. The nonce must be the CURRENT counter of the
/// target instance — the value before any increment.
pub fn transition_digest(candidate_state: &[u8], nonce: TransitionNonce) -> Digest {
    let inner = keccak256(candidate_state);
    let mut bound = [0u8; 64];
    bound[..32].copy_from_slice(inner.as_bytes());
    bound[32..].copy_from_slice(&nonce.to_be_bytes32());
    keccak256(&bound)
}
