//! Message and hash signing with key-identity verification.
//!
//! Two layers share one signature format. The hash layer signs a caller
//! supplied 256-bit digest directly. The message layer derives the digest
//! from UTF-8 text prefixed with [`MESSAGE_MAGIC`], so a signature over
//! free-form text can never be replayed as a signature over transaction
//! data or another protocol's messages.
//!
//! Verification recovers the signing key from the signature itself and
//! compares its identity against the expected one. Failures carry the
//! full audit context: both identities, the digest, and the signature.

use std::fmt;

use super::identity::{derive_key_id, derive_key_id_uncompressed, KeyId};
use super::keys::{PublicKey, SecretKey};
use super::recovery::{CompactSignature, RecoverableSigner};
use crate::crypto::hashing::sha256d;
use crate::error::CryptoError;
use crate::serialization::write_var_str;

/// Domain-separation prefix mixed into every signed-message digest.
pub const MESSAGE_MAGIC: &str = "Causeway Signed Message:\n";

/// Why a signature failed verification.
#[derive(Debug, Clone)]
pub enum VerificationFailure {
    /// No public key could be recovered from the signature.
    Recovery,
    /// The recovered key's identity does not match the expected one.
    KeyMismatch {
        /// Identity the caller expected to have signed.
        expected: KeyId,
        /// Identity actually recovered from the signature.
        recovered: KeyId,
        /// Digest the signature was checked against.
        digest: [u8; 32],
        /// The offending signature.
        signature: CompactSignature,
    },
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationFailure::Recovery => write!(f, "Error recovering public key."),
            VerificationFailure::KeyMismatch {
                expected,
                recovered,
                digest,
                signature,
            } => write!(
                f,
                "Keys don't match: pubkey={}, pubkeyFromSig={}, signaturehash={}, vchSig={}",
                expected,
                recovered,
                hex::encode(digest),
                signature.to_base64()
            ),
        }
    }
}

impl std::error::Error for VerificationFailure {}

/// Digest signed by the message layer: double-SHA256 over the
/// length-prefixed magic followed by the length-prefixed text.
pub fn signed_message_digest(message: &str) -> [u8; 32] {
    let mut preimage = Vec::with_capacity(1 + MESSAGE_MAGIC.len() + 9 + message.len());
    write_var_str(&mut preimage, MESSAGE_MAGIC);
    write_var_str(&mut preimage, message);
    sha256d(&preimage)
}

/// Sign a 256-bit digest directly.
pub fn sign_hash(
    backend: &impl RecoverableSigner,
    digest: &[u8; 32],
    secret_key: &SecretKey,
) -> Result<CompactSignature, CryptoError> {
    backend.sign_recoverable(digest, secret_key)
}

/// Verify a digest signature against an expected key identity.
///
/// The identity of the recovered key is derived in the serialization
/// form the signature's header byte declares, so signatures from
/// uncompressed keys check against their uncompressed identity.
pub fn verify_hash(
    backend: &impl RecoverableSigner,
    digest: &[u8; 32],
    expected: &KeyId,
    signature: &CompactSignature,
) -> Result<(), VerificationFailure> {
    let recovered_key = match backend.recover(digest, signature) {
        Ok(key) => key,
        Err(_) => return Err(VerificationFailure::Recovery),
    };

    let recovered = if signature.is_compressed() {
        derive_key_id(&recovered_key)
    } else {
        derive_key_id_uncompressed(&recovered_key)
    };

    if recovered != *expected {
        return Err(VerificationFailure::KeyMismatch {
            expected: *expected,
            recovered,
            digest: *digest,
            signature: *signature,
        });
    }

    Ok(())
}

/// Verify a digest signature against an expected public key.
pub fn verify_hash_with_key(
    backend: &impl RecoverableSigner,
    digest: &[u8; 32],
    public_key: &PublicKey,
    signature: &CompactSignature,
) -> Result<(), VerificationFailure> {
    verify_hash(backend, digest, &derive_key_id(public_key), signature)
}

/// Sign UTF-8 text under the message-magic domain.
pub fn sign_message(
    backend: &impl RecoverableSigner,
    message: &str,
    secret_key: &SecretKey,
) -> Result<CompactSignature, CryptoError> {
    sign_hash(backend, &signed_message_digest(message), secret_key)
}

/// Verify a text signature against an expected key identity.
pub fn verify_message(
    backend: &impl RecoverableSigner,
    message: &str,
    expected: &KeyId,
    signature: &CompactSignature,
) -> Result<(), VerificationFailure> {
    verify_hash(backend, &signed_message_digest(message), expected, signature)
}

/// Verify a text signature against an expected public key.
pub fn verify_message_with_key(
    backend: &impl RecoverableSigner,
    message: &str,
    public_key: &PublicKey,
    signature: &CompactSignature,
) -> Result<(), VerificationFailure> {
    verify_message(backend, message, &derive_key_id(public_key), signature)
}
