//! # qstate-store — Authorization-Gated State Store
//!
//! The heart of QuorumState: a [`QuorumStore`] holds one opaque state value
//! that can only be replaced when every registered validator co-signs the
//! replacement, and a transition counter that makes each authorization
//! single-use.
//!
//! ## Operations
//!
//! - `validators()` — the ordered, immutable validator registry.
//! - `state()` — the current opaque state.
//! - `nonce()` — the current transition counter.
//! - `set_state()` — the only mutation: verify a full signature set against
//!   the counter-bound digest, then atomically replace the state and advance
//!   the counter. Any failure leaves the store untouched.
//!
//! ## Concurrency
//!
//! `set_state` takes `&mut self` — the borrow checker enforces the
//! serialization of mutating calls that a hosting environment would
//! otherwise have to provide. Verification and commit execute as one
//! uninterruptible unit per call.

pub mod store;
pub mod verify;

pub use store::QuorumStore;
pub use verify::verify_transition;
