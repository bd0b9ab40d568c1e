//! # Keccak-256 Digest Computation
//!
//! The original keccak padding, not the NIST SHA-3 variant — digests must
//! match what `ecrecover`-style external tooling produces.

use qstate_core::Digest;
use sha3::{Digest as _, Keccak256};

/// Compute the keccak-256 digest of a byte slice.
pub fn keccak256(bytes: &[u8]) -> Digest {
    let hash = Keccak256::digest(bytes);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hash);
    Digest::from_bytes(out)
}
