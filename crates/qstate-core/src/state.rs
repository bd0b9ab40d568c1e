//! # Opaque State Bytes
//!
//! The store holds one opaque byte sequence as its current state. The store
//! never interprets it — a successful transition replaces it in full, a
//! failed transition leaves it untouched.
//!
//! ## Serde
//!
//! State serializes as a lowercase `0x`-prefixed hex string so persisted
//! instances stay printable regardless of content.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CryptoError;
use crate::hexstr;

/// An opaque state value.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct StateBytes(Vec<u8>);

impl StateBytes {
    /// Create a state value from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Parse a state value from a hex string, `0x` prefix optional.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        Ok(Self(hexstr::decode(hex)?))
    }

    /// Render the state as a lowercase `0x`-prefixed hex string.
    pub fn to_hex(&self) -> String {
        hexstr::encode(&self.0)
    }

    /// The raw state bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the value, returning the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length of the state in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the state is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for StateBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for StateBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Serialize for StateBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for StateBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for StateBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StateBytes({}, {} bytes)", self.to_hex(), self.0.len())
    }
}

impl std::fmt::Display for StateBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let state = StateBytes::new(b"Asdfg".as_slice());
        let hex = state.to_hex();
        assert_eq!(hex, "0x4173646667");
        assert_eq!(StateBytes::from_hex(&hex).unwrap(), state);
    }

    #[test]
    fn test_empty_state_is_valid() {
        let state = StateBytes::new(Vec::new());
        assert!(state.is_empty());
        assert_eq!(state.to_hex(), "0x");
        assert_eq!(StateBytes::from_hex("0x").unwrap(), state);
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let state = StateBytes::new(vec![0x00, 0xff, 0x7f]);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"0x00ff7f\"");
        let back: StateBytes = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
