//! # Recoverable secp256k1 Signatures
//!
//! Signing and signer recovery for state-transition authorization.
//! Signatures are produced over the raw 32-byte authorization digest — no
//! message-prefixing transform is applied — so triples produced by external
//! `ecrecover`-style tooling verify here unchanged, and vice versa.
//!
//! ## Signer Identity
//!
//! A signer's identity is the last 20 bytes of the keccak-256 digest of its
//! uncompressed public key (the 64 bytes of x || y, without the 0x04 tag).
//!
//! ## Recovery Id Encoding
//!
//! External tooling commonly offsets the recovery id by 27 (values 27/28).
//! [`recover_signer`] accepts both the raw form (0/1) and the offset form;
//! [`SignerKeyPair::sign`] emits the offset form for interoperability.
//!
//! ## Security Invariant
//!
//! - Secret keys are never serialized or logged. `SignerKeyPair` does not
//!   implement `Serialize`, and its `Debug` output is redacted.

use std::sync::OnceLock;

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{All, Message, PublicKey, Secp256k1, SecretKey};
use serde::{Deserialize, Serialize};

use qstate_core::{hexstr, CryptoError, Digest, ValidatorAddress};

use crate::keccak::keccak256;

fn secp() -> &'static Secp256k1<All> {
    static CONTEXT: OnceLock<Secp256k1<All>> = OnceLock::new();
    CONTEXT.get_or_init(Secp256k1::new)
}

// ─── SignatureTriple ─────────────────────────────────────────────────

/// The three components of a recoverable signature, sufficient to recover
/// the signer's identity from a digest.
///
/// `r` and `s` serialize as `0x`-prefixed hex strings; `recovery_id` as a
/// plain integer in either accepted encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureTriple {
    /// Recovery indicator: 0/1 raw, or 27/28 in the legacy offset form.
    pub recovery_id: u8,
    /// The r scalar, 32 bytes big-endian.
    #[serde(with = "hexstr::array32")]
    pub r: [u8; 32],
    /// The s scalar, 32 bytes big-endian.
    #[serde(with = "hexstr::array32")]
    pub s: [u8; 32],
}

impl SignatureTriple {
    /// Assemble a triple from its components.
    pub fn new(recovery_id: u8, r: [u8; 32], s: [u8; 32]) -> Self {
        Self { recovery_id, r, s }
    }
}

/// Map a recovery indicator to the raw 0/1 form, rejecting anything else.
fn normalize_recovery_id(recovery_id: u8) -> Result<u8, CryptoError> {
    match recovery_id {
        0 | 1 => Ok(recovery_id),
        27 | 28 => Ok(recovery_id - 27),
        other => Err(CryptoError::InvalidSignature(format!(
            "recovery id {other} out of range (expected 0/1 or 27/28)"
        ))),
    }
}

// ─── Recovery ────────────────────────────────────────────────────────

/// Recover the signer identity from a signature over `digest`.
///
/// The digest is taken as signed directly — callers are responsible for
/// having bound it through
/// [`transition_digest`](crate::binding::transition_digest) when the
/// signature authorizes a state transition.
pub fn recover_signer(
    digest: &Digest,
    triple: &SignatureTriple,
) -> Result<ValidatorAddress, CryptoError> {
    let recovery_id = RecoveryId::from_i32(i32::from(normalize_recovery_id(triple.recovery_id)?))
        .map_err(|e| CryptoError::InvalidSignature(format!("recovery id: {e}")))?;

    let mut compact = [0u8; 64];
    compact[..32].copy_from_slice(&triple.r);
    compact[32..].copy_from_slice(&triple.s);
    let signature = RecoverableSignature::from_compact(&compact, recovery_id)
        .map_err(|e| CryptoError::InvalidSignature(format!("signature components: {e}")))?;

    let message = Message::from_digest(*digest.as_bytes());
    let public_key = secp()
        .recover_ecdsa(&message, &signature)
        .map_err(|e| CryptoError::InvalidSignature(format!("recovery failed: {e}")))?;

    Ok(address_from_public_key(&public_key))
}

/// Derive a validator identity from a secp256k1 public key.
pub fn address_from_public_key(public_key: &PublicKey) -> ValidatorAddress {
    let uncompressed = public_key.serialize_uncompressed();
    // Skip the 0x04 tag byte; hash the 64-byte x || y point encoding.
    let digest = keccak256(&uncompressed[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest.as_bytes()[12..]);
    ValidatorAddress::from_bytes(address)
}

// ─── SignerKeyPair ───────────────────────────────────────────────────

/// A secp256k1 key pair for producing authorization signatures.
///
/// Does not implement `Serialize` — secret keys must not be accidentally
/// serialized into logs, responses, or persisted instances.
pub struct SignerKeyPair {
    secret_key: SecretKey,
    public_key: PublicKey,
}

impl SignerKeyPair {
    /// Generate a new random key pair.
    pub fn generate() -> Self {
        let (secret_key, public_key) = secp().generate_keypair(&mut rand::rngs::OsRng);
        Self {
            secret_key,
            public_key,
        }
    }

    /// Create a key pair from a 32-byte secret key.
    ///
    /// Fails if the bytes are zero or not below the curve order.
    pub fn from_seed(seed: &[u8; 32]) -> Result<Self, CryptoError> {
        let secret_key = SecretKey::from_slice(seed)
            .map_err(|e| CryptoError::InvalidKey(format!("invalid secret key: {e}")))?;
        let public_key = PublicKey::from_secret_key(secp(), &secret_key);
        Ok(Self {
            secret_key,
            public_key,
        })
    }

    /// Create a key pair from a 64-hex-digit secret key, `0x` prefix optional.
    pub fn from_secret_hex(hex: &str) -> Result<Self, CryptoError> {
        let seed = hexstr::decode_fixed::<32>(hex)
            .map_err(|e| CryptoError::InvalidKey(format!("invalid secret key hex: {e}")))?;
        Self::from_seed(&seed)
    }

    /// The raw 32-byte secret key.
    ///
    /// Exposed for key-export tooling only; handle with care.
    pub fn secret_bytes(&self) -> [u8; 32] {
        self.secret_key.secret_bytes()
    }

    /// The signer's public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The validator identity of this key pair.
    pub fn address(&self) -> ValidatorAddress {
        address_from_public_key(&self.public_key)
    }

    /// Sign a digest, producing a recoverable signature triple.
    ///
    /// The digest is signed as-is, without prefixing. The emitted
    /// `recovery_id` uses the legacy 27/28 offset form.
    pub fn sign(&self, digest: &Digest) -> SignatureTriple {
        let message = Message::from_digest(*digest.as_bytes());
        let signature = secp().sign_ecdsa_recoverable(&message, &self.secret_key);
        let (recovery_id, compact) = signature.serialize_compact();

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&compact[..32]);
        s.copy_from_slice(&compact[32..]);

        // to_i32() is 0..=3; the offset form stays within u8.
        SignatureTriple::new(recovery_id.to_i32() as u8 + 27, r, s)
    }
}

impl std::fmt::Debug for SignerKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SignerKeyPair(address: {}, <secret>)", self.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::transition_digest;
    use qstate_core::TransitionNonce;

    // Key/address fixtures generated with `ethkey generate random` — the
    // addresses are what independent Ethereum tooling derives for these keys.
    const FIXTURES: [(&str, &str); 3] = [
        (
            "0x95698c0184c58f24c3587dda4aedd6ed378729f23fc19f7ca0fde21b3bfe92a2",
            "0x484817497433b8f896f4230398140c79d6e71bbe",
        ),
        (
            "0x3b3801207c2d6851d389fccd5e52621e9dbfe2d7aee5f691c350ccc739f0943b",
            "0xee613015ccea088566d50a865d49d3ef970442b5",
        ),
        (
            "0x323f25528bca4eac32e75590ec62a6674240468de6ae7633f580d727642d00a6",
            "0xc274fcaf830aa911f1b5a32c8af21c6ee7c3d264",
        ),
    ];

    #[test]
    fn test_address_derivation_matches_external_tooling() {
        for (secret, address) in FIXTURES {
            let keypair = SignerKeyPair::from_secret_hex(secret).unwrap();
            assert_eq!(keypair.address(), ValidatorAddress::from_hex(address).unwrap());
        }
    }

    #[test]
    fn test_sign_recover_roundtrip() {
        let keypair = SignerKeyPair::generate();
        let digest = keccak256(b"authorize this");
        let triple = keypair.sign(&digest);
        let recovered = recover_signer(&digest, &triple).unwrap();
        assert_eq!(recovered, keypair.address());
    }

    #[test]
    fn test_recover_external_signature() {
        // Signature produced by an independent RFC 6979 implementation over
        // the bound digest for state "Qwerty" at nonce 1, using the first
        // fixture key.
        let digest = transition_digest(b"Qwerty", TransitionNonce::new(1));
        let triple = SignatureTriple::new(
            28,
            hexstr::decode_fixed::<32>(
                "0xdc9e4b68f09e29e64e5e1d779452ee9a77d5f88d4c82876b0fe1c634186a6c2c",
            )
            .unwrap(),
            hexstr::decode_fixed::<32>(
                "0x5b315be8d4bb6b3e8a9e456fbc257fe0b4c405081fa15beda06cbd1d42beb779",
            )
            .unwrap(),
        );
        let recovered = recover_signer(&digest, &triple).unwrap();
        assert_eq!(recovered, ValidatorAddress::from_hex(FIXTURES[0].1).unwrap());
    }

    #[test]
    fn test_both_recovery_id_encodings_accepted() {
        let keypair = SignerKeyPair::generate();
        let digest = keccak256(b"encoding check");
        let offset = keypair.sign(&digest);
        assert!(offset.recovery_id == 27 || offset.recovery_id == 28);

        let raw = SignatureTriple::new(offset.recovery_id - 27, offset.r, offset.s);
        assert_eq!(
            recover_signer(&digest, &offset).unwrap(),
            recover_signer(&digest, &raw).unwrap()
        );
    }

    #[test]
    fn test_recovery_id_out_of_range_rejected() {
        let keypair = SignerKeyPair::generate();
        let digest = keccak256(b"bad recovery id");
        let mut triple = keypair.sign(&digest);
        triple.recovery_id = 5;
        assert!(matches!(
            recover_signer(&digest, &triple),
            Err(CryptoError::InvalidSignature(_))
        ));
    }

    #[test]
    fn test_zero_signature_rejected() {
        let digest = keccak256(b"zeroes");
        let triple = SignatureTriple::new(27, [0u8; 32], [0u8; 32]);
        assert!(recover_signer(&digest, &triple).is_err());
    }

    #[test]
    fn test_wrong_digest_recovers_different_signer() {
        let keypair = SignerKeyPair::generate();
        let signed = keccak256(b"the digest that was signed");
        let other = keccak256(b"a different digest");
        let triple = keypair.sign(&signed);
        // Recovery over the wrong digest either fails outright or yields
        // some other identity — never the real signer.
        if let Ok(recovered) = recover_signer(&other, &triple) {
            assert_ne!(recovered, keypair.address());
        }
    }

    #[test]
    fn test_from_seed_deterministic() {
        let seed = [0x11u8; 32];
        let a = SignerKeyPair::from_seed(&seed).unwrap();
        let b = SignerKeyPair::from_seed(&seed).unwrap();
        assert_eq!(a.address(), b.address());
        assert_eq!(
            a.address(),
            ValidatorAddress::from_hex("0x19e7e376e7c213b7e7e7e46cc70a5dd086daff2a").unwrap()
        );
    }

    #[test]
    fn test_from_seed_rejects_zero_key() {
        assert!(SignerKeyPair::from_seed(&[0u8; 32]).is_err());
    }

    #[test]
    fn test_triple_serde_roundtrip() {
        let keypair = SignerKeyPair::generate();
        let digest = keccak256(b"serde");
        let triple = keypair.sign(&digest);
        let json = serde_json::to_string(&triple).unwrap();
        let back: SignatureTriple = serde_json::from_str(&json).unwrap();
        assert_eq!(triple, back);
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let keypair = SignerKeyPair::generate();
        let debug = format!("{keypair:?}");
        assert!(debug.contains("<secret>"));
        let secret_hex = hexstr::encode(&keypair.secret_bytes());
        assert!(!debug.contains(&secret_hex[2..]));
    }
}
