//! # Transition Nonce
//!
//! The strictly increasing counter bound into every authorization digest.
//! A signature set is only valid for the exact counter value it was signed
//! against; once a transition commits and the counter advances, replaying
//! the old signatures produces a different digest and fails verification.
//!
//! ## Invariants
//!
//! - A freshly constructed store starts at nonce `1`.
//! - The nonce advances by exactly `1` on every successful transition and
//!   never moves otherwise.

use serde::{Deserialize, Serialize};

/// The transition counter of a store instance.
///
/// Equals the number of successful transitions plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TransitionNonce(u64);

impl TransitionNonce {
    /// The nonce of a freshly constructed store.
    pub fn initial() -> Self {
        Self(1)
    }

    /// Construct a nonce with an explicit value.
    ///
    /// Used by out-of-band signing tooling that binds a digest against a
    /// counter value read from a live instance. Store instances only ever
    /// produce nonces via [`initial()`](Self::initial) and
    /// [`next()`](Self::next).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// The current counter value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The nonce after one successful transition.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The fixed-width wire encoding bound into authorization digests:
    /// 32 bytes, big-endian, zero-padded on the left.
    pub fn to_be_bytes32(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[24..].copy_from_slice(&self.0.to_be_bytes());
        out
    }
}

impl std::fmt::Display for TransitionNonce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_is_one() {
        assert_eq!(TransitionNonce::initial().value(), 1);
    }

    #[test]
    fn test_next_increments_by_one() {
        let nonce = TransitionNonce::initial();
        assert_eq!(nonce.next().value(), 2);
        assert_eq!(nonce.next().next().value(), 3);
    }

    #[test]
    fn test_be_bytes32_zero_padded() {
        let encoded = TransitionNonce::new(1).to_be_bytes32();
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_be_bytes32_big_endian() {
        let encoded = TransitionNonce::new(0x0102_0304).to_be_bytes32();
        assert_eq!(&encoded[..28], &[0u8; 28]);
        assert_eq!(&encoded[28..], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_serde_is_plain_integer() {
        let json = serde_json::to_string(&TransitionNonce::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: TransitionNonce = serde_json::from_str("7").unwrap();
        assert_eq!(back.value(), 7);
    }
}
