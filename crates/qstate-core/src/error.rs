//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout QuorumState. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Cryptographic errors fail loudly with full context.
//! - Transition errors carry the exact position and the expected vs
//!   recovered identity, so a rejected authorization can be diagnosed
//!   without re-running verification.
//! - A failed transition is a pure rejection: the error is the only
//!   observable effect.

use thiserror::Error;

use crate::address::ValidatorAddress;

/// Error in cryptographic primitive operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Key material could not be parsed or is not a valid curve element.
    #[error("key error: {0}")]
    InvalidKey(String),

    /// Signature components could not be parsed or recovered from.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// Hex input could not be decoded.
    #[error("invalid hex encoding: {0}")]
    InvalidHex(String),
}

/// Error constructing a store instance.
#[derive(Error, Debug)]
pub enum ConstructionError {
    /// The validator set must contain at least one signer.
    #[error("validator set must not be empty")]
    EmptyValidatorSet,
}

/// Error rejecting a state transition.
///
/// Any of these leaves the store untouched — state and nonce after a failed
/// `set_state` are identical to their values before the call.
#[derive(Error, Debug)]
pub enum TransitionError {
    /// The number of signature triples does not match the validator count.
    /// Partial signature sets are never credited.
    #[error("expected {expected} signatures, got {got}")]
    SignatureCount {
        /// Number of registered validators.
        expected: usize,
        /// Number of signature triples supplied.
        got: usize,
    },

    /// The signer recovered at a position is not the validator registered
    /// there. Matching is positional — a valid signer at the wrong index is
    /// still a mismatch. Signatures bound to a different nonce also surface
    /// here, since the nonce is baked into the signed digest.
    #[error("signer mismatch at position {position}: expected {expected}, recovered {recovered}")]
    SignerMismatch {
        /// Zero-based position in the signature array.
        position: usize,
        /// The validator registered at this position.
        expected: ValidatorAddress,
        /// The identity actually recovered from the signature.
        recovered: ValidatorAddress,
    },

    /// A signature's components were malformed (recovery id out of range,
    /// r/s outside the curve order) and no identity could be recovered.
    #[error("signature recovery failed at position {position}: {source}")]
    Recovery {
        /// Zero-based position in the signature array.
        position: usize,
        /// The underlying primitive failure.
        source: CryptoError,
    },
}
