//! # Hex Encoding Helpers
//!
//! One hex convention for the whole workspace: lowercase, `0x`-prefixed on
//! output, prefix optional on input. All byte-valued newtypes and serde
//! adapters route through these functions.

use crate::error::CryptoError;

/// Encode bytes as a lowercase `0x`-prefixed hex string.
pub fn encode(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode a hex string, accepting an optional `0x`/`0X` prefix.
pub fn decode(input: &str) -> Result<Vec<u8>, CryptoError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).map_err(|e| CryptoError::InvalidHex(e.to_string()))
}

/// Decode a hex string into a fixed-width byte array.
pub fn decode_fixed<const N: usize>(input: &str) -> Result<[u8; N], CryptoError> {
    let bytes = decode(input)?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidHex(format!("expected {N} bytes, got {got}")))
}

/// Serde adapter: `Vec<u8>` as a `0x`-prefixed hex string.
pub mod vec {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize bytes as a hex string.
    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode(bytes))
    }

    /// Deserialize bytes from a hex string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::decode(&s).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter: `[u8; 32]` as a `0x`-prefixed hex string.
pub mod array32 {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize a 32-byte array as a hex string.
    pub fn serialize<S: Serializer>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode(bytes))
    }

    /// Deserialize a 32-byte array from a hex string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
        let s = String::deserialize(deserializer)?;
        super::decode_fixed::<32>(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_prefixes() {
        assert_eq!(encode(&[0xde, 0xad]), "0xdead");
        assert_eq!(encode(&[]), "0x");
    }

    #[test]
    fn test_decode_accepts_optional_prefix() {
        assert_eq!(decode("0xdead").unwrap(), vec![0xde, 0xad]);
        assert_eq!(decode("dead").unwrap(), vec![0xde, 0xad]);
        assert_eq!(decode("0Xdead").unwrap(), vec![0xde, 0xad]);
        assert_eq!(decode(" 0xdead ").unwrap(), vec![0xde, 0xad]);
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(decode("0xzz").is_err());
        assert!(decode("abc").is_err()); // odd length
    }

    #[test]
    fn test_decode_fixed_enforces_width() {
        assert!(decode_fixed::<2>("0xdead").is_ok());
        assert!(decode_fixed::<4>("0xdead").is_err());
    }
}
