//! # qstate-crypto — Cryptographic Primitives
//!
//! Provides the cryptographic building blocks for QuorumState:
//!
//! - **Keccak-256** digest computation (`keccak256`).
//! - **Authorization digest binding** (`transition_digest`) — the pure
//!   function that ties a candidate state to the transition counter it is
//!   authorized against.
//! - **Recoverable secp256k1 signatures** — signing with `SignerKeyPair`,
//!   identity recovery with `recover_signer`, and the `SignatureTriple`
//!   wire type carrying `(recovery_id, r, s)`.
//!
//! ## Crate Policy
//!
//! - Depends only on `qstate-core` internally.
//! - No mocking of cryptographic operations in tests — all tests use real
//!   keccak-256 and real secp256k1, checked against fixtures produced by
//!   external signing tooling.
//! - `unsafe` prohibited.

pub mod binding;
pub mod ecdsa;
pub mod keccak;

pub use binding::transition_digest;
pub use ecdsa::{recover_signer, SignatureTriple, SignerKeyPair};
pub use keccak::keccak256;
