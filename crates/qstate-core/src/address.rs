//! # Validator Addresses
//!
//! Newtype wrapper for the 20-byte signer identities that make up the
//! validator registry. An address is derived from a secp256k1 public key
//! (the derivation lives in `qstate-crypto`); this crate only carries the
//! identity itself.
//!
//! ## Serde
//!
//! Addresses serialize/deserialize as lowercase `0x`-prefixed hex strings,
//! matching the format external signing tooling uses for signer identities.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CryptoError;
use crate::hexstr;

/// A 20-byte validator identity.
///
/// The registry holds these in a fixed order; signature verification matches
/// recovered signers against them positionally.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValidatorAddress(pub [u8; 20]);

impl ValidatorAddress {
    /// Create an address from raw 20 bytes.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Return the raw 20-byte address.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Render the address as a lowercase `0x`-prefixed hex string.
    pub fn to_hex(&self) -> String {
        hexstr::encode(&self.0)
    }

    /// Parse an address from a 40-hex-digit string, `0x` prefix optional.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let bytes = hexstr::decode_fixed::<20>(hex)
            .map_err(|e| CryptoError::InvalidKey(format!("invalid address: {e}")))?;
        Ok(Self(bytes))
    }
}

impl Serialize for ValidatorAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ValidatorAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for ValidatorAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ValidatorAddress({})", self.to_hex())
    }
}

impl std::fmt::Display for ValidatorAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x484817497433b8f896f4230398140c79d6e71bbe";

    #[test]
    fn test_hex_roundtrip() {
        let addr = ValidatorAddress::from_hex(ADDR).unwrap();
        assert_eq!(addr.to_hex(), ADDR);
    }

    #[test]
    fn test_from_hex_without_prefix() {
        let with = ValidatorAddress::from_hex(ADDR).unwrap();
        let without = ValidatorAddress::from_hex(&ADDR[2..]).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_from_hex_rejects_wrong_width() {
        assert!(ValidatorAddress::from_hex("0xdead").is_err());
        assert!(ValidatorAddress::from_hex(&"ab".repeat(32)).is_err());
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let addr = ValidatorAddress::from_hex(ADDR).unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{ADDR}\""));
        let back: ValidatorAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }

    #[test]
    fn test_display_matches_hex() {
        let addr = ValidatorAddress::from_bytes([0x11; 20]);
        assert_eq!(addr.to_string(), format!("0x{}", "11".repeat(20)));
    }
}
