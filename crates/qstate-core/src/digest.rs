//! # Digest Newtype
//!
//! Fixed-width 32-byte digest produced by the keccak-256 pipeline in
//! `qstate-crypto`. The digest bound into an authorization is the only
//! bit-exact wire contract the store exposes — external signing tooling
//! must reproduce it byte for byte.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CryptoError;
use crate::hexstr;

/// A 32-byte cryptographic digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; 32]);

impl Digest {
    /// Create a digest from raw 32 bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Return the raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the digest as a lowercase `0x`-prefixed hex string.
    pub fn to_hex(&self) -> String {
        hexstr::encode(&self.0)
    }

    /// Parse a digest from a 64-hex-digit string, `0x` prefix optional.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        Ok(Self(hexstr::decode_fixed::<32>(hex)?))
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
