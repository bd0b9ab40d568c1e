//! # Transition Signature Verification
//!
//! Checks a signature set against the validator registry, positionally and
//! all-or-nothing. This is deliberately separate from the store so the
//! verification rules can be exercised in isolation from commit semantics.

use qstate_core::{Digest, TransitionError, ValidatorAddress};
use qstate_crypto::{recover_signer, SignatureTriple};

/// Verify that `signatures` authorizes a transition bound to `digest`.
///
/// Rules:
/// - exactly one signature triple per registered validator;
/// - the signer recovered from `signatures[i]` must equal `validators[i]` —
///   matching is positional, not set-membership;
/// - the first failing position aborts the whole check.
///
/// Signatures bound to a different counter value recover to some unrelated
/// identity (the signed digest differs), so they surface as
/// [`TransitionError::SignerMismatch`].
pub fn verify_transition(
    validators: &[ValidatorAddress],
    digest: &Digest,
    signatures: &[SignatureTriple],
) -> Result<(), TransitionError> {
    if signatures.len() != validators.len() {
        return Err(TransitionError::SignatureCount {
            expected: validators.len(),
            got: signatures.len(),
        });
    }

    for (position, (expected, triple)) in validators.iter().zip(signatures).enumerate() {
        let recovered = recover_signer(digest, triple)
            .map_err(|source| TransitionError::Recovery { position, source })?;
        if recovered != *expected {
            return Err(TransitionError::SignerMismatch {
                position,
                expected: *expected,
                recovered,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qstate_crypto::{keccak256, SignerKeyPair};

    fn keypairs(count: usize) -> Vec<SignerKeyPair> {
        (0..count)
            .map(|i| SignerKeyPair::from_seed(&[0x11 * (i as u8 + 1); 32]).unwrap())
            .collect()
    }

    fn addresses(keypairs: &[SignerKeyPair]) -> Vec<ValidatorAddress> {
        keypairs.iter().map(SignerKeyPair::address).collect()
    }

    #[test]
    fn test_full_set_in_order_verifies() {
        let keys = keypairs(3);
        let digest = keccak256(b"payload");
        let signatures: Vec<_> = keys.iter().map(|k| k.sign(&digest)).collect();
        verify_transition(&addresses(&keys), &digest, &signatures).unwrap();
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let keys = keypairs(3);
        let digest = keccak256(b"payload");
        let signatures: Vec<_> = keys.iter().take(2).map(|k| k.sign(&digest)).collect();
        let err = verify_transition(&addresses(&keys), &digest, &signatures).unwrap_err();
        assert!(matches!(
            err,
            TransitionError::SignatureCount {
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn test_excess_signatures_rejected() {
        let keys = keypairs(2);
        let digest = keccak256(b"payload");
        let mut signatures: Vec<_> = keys.iter().map(|k| k.sign(&digest)).collect();
        signatures.push(signatures[0]);
        let err = verify_transition(&addresses(&keys), &digest, &signatures).unwrap_err();
        assert!(matches!(err, TransitionError::SignatureCount { .. }));
    }

    #[test]
    fn test_swapped_positions_rejected() {
        let keys = keypairs(3);
        let digest = keccak256(b"payload");
        let mut signatures: Vec<_> = keys.iter().map(|k| k.sign(&digest)).collect();
        signatures.swap(0, 1);
        let err = verify_transition(&addresses(&keys), &digest, &signatures).unwrap_err();
        match err {
            TransitionError::SignerMismatch {
                position,
                expected,
                recovered,
            } => {
                assert_eq!(position, 0);
                assert_eq!(expected, keys[0].address());
                assert_eq!(recovered, keys[1].address());
            }
            other => panic!("expected SignerMismatch, got {other}"),
        }
    }

    #[test]
    fn test_unregistered_signer_rejected() {
        let keys = keypairs(3);
        let outsider = SignerKeyPair::generate();
        let digest = keccak256(b"payload");
        let mut signatures: Vec<_> = keys.iter().map(|k| k.sign(&digest)).collect();
        signatures[2] = outsider.sign(&digest);
        let err = verify_transition(&addresses(&keys), &digest, &signatures).unwrap_err();
        assert!(matches!(
            err,
            TransitionError::SignerMismatch { position: 2, .. }
        ));
    }

    #[test]
    fn test_malformed_triple_reports_position() {
        let keys = keypairs(2);
        let digest = keccak256(b"payload");
        let mut signatures: Vec<_> = keys.iter().map(|k| k.sign(&digest)).collect();
        signatures[1].recovery_id = 99;
        let err = verify_transition(&addresses(&keys), &digest, &signatures).unwrap_err();
        assert!(matches!(err, TransitionError::Recovery { position: 1, .. }));
    }

    #[test]
    fn test_empty_registry_empty_signatures_vacuous() {
        // The store forbids empty registries at construction; the verifier
        // itself treats the empty/empty case as vacuously satisfied.
        let digest = keccak256(b"payload");
        verify_transition(&[], &digest, &[]).unwrap();
    }
}
