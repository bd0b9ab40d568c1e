//! # QuorumStore — Validator-Gated State with Replay Protection
//!
//! One mutable state vector `(state, nonce)` and exactly one transition:
//! [`QuorumStore::set_state`] either moves `(S, n)` to `(S', n + 1)` or is a
//! pure rejection with no observable effect. There are no other states or
//! transitions.
//!
//! ## Atomicity
//!
//! `set_state` computes the outcome against an immutable snapshot and only
//! mutates through two final assignments after full verification — partial
//! mutation is not observable even mid-call.

use serde::{Deserialize, Serialize};

use qstate_core::{
    hexstr, ConstructionError, StateBytes, TransitionError, TransitionNonce, ValidatorAddress,
};
use qstate_crypto::{transition_digest, SignatureTriple};

use crate::verify::verify_transition;

/// An authorization-gated state store.
///
/// The validator registry is fixed at construction and immutable for the
/// lifetime of the instance. Validator addresses are expected to be
/// distinct; duplicates are not rejected, but a duplicated entry simply
/// requires that signer's signature at each position it occupies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuorumStore {
    /// Ordered validator registry, fixed at construction.
    validators: Vec<ValidatorAddress>,
    /// Opaque deployment parameter, carried but never interpreted.
    #[serde(with = "hexstr::vec")]
    reserved: Vec<u8>,
    /// Current opaque state value.
    state: StateBytes,
    /// Current transition counter.
    nonce: TransitionNonce,
}

impl QuorumStore {
    /// Construct a store with its validator registry, opaque deployment
    /// parameter, and initial state. The nonce starts at 1.
    pub fn new(
        validators: Vec<ValidatorAddress>,
        reserved: Vec<u8>,
        initial_state: StateBytes,
    ) -> Result<Self, ConstructionError> {
        if validators.is_empty() {
            return Err(ConstructionError::EmptyValidatorSet);
        }
        Ok(Self {
            validators,
            reserved,
            state: initial_state,
            nonce: TransitionNonce::initial(),
        })
    }

    /// The ordered validator registry, exactly as supplied at construction.
    pub fn validators(&self) -> &[ValidatorAddress] {
        &self.validators
    }

    /// The opaque deployment parameter, exactly as supplied at construction.
    pub fn reserved(&self) -> &[u8] {
        &self.reserved
    }

    /// The current state value.
    pub fn state(&self) -> &StateBytes {
        &self.state
    }

    /// The current transition counter.
    pub fn nonce(&self) -> TransitionNonce {
        self.nonce
    }

    /// Replace the current state with `candidate`, authorized by one
    /// signature per validator over the digest binding `candidate` to the
    /// CURRENT nonce.
    ///
    /// On success the state is replaced in full and the nonce advances by
    /// exactly 1. On any failure the store is untouched — state and nonce
    /// read back bit-identical to before the call.
    pub fn set_state(
        &mut self,
        candidate: StateBytes,
        signatures: &[SignatureTriple],
    ) -> Result<(), TransitionError> {
        let digest = transition_digest(candidate.as_bytes(), self.nonce);
        verify_transition(&self.validators, &digest, signatures)?;

        self.state = candidate;
        self.nonce = self.nonce.next();
        Ok(())
    }
}
