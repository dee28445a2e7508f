//! Recoverable ECDSA signatures.
//!
//! A recoverable signature permits reconstruction of the signing public
//! key from the signature and the signed digest alone. Signatures use
//! the 65-byte compact wire encoding: a header byte of `27 + recovery_id`
//! (plus 4 when the signer's public key serializes compressed) followed
//! by the 32-byte `r` and 32-byte `s` components.
//!
//! The signing primitive is isolated behind [`RecoverableSigner`] so the
//! concrete cryptographic backend is swappable without touching the
//! signing-protocol logic layered on top.

use std::fmt;

use base64::{engine::general_purpose, Engine as _};
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{All, Message, Secp256k1};

use super::keys::{PublicKey, SecretKey};
use crate::error::CryptoError;

/// Size of a compact recoverable signature in bytes.
pub const COMPACT_SIGNATURE_SIZE: usize = 65;

/// A 65-byte compact recoverable signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CompactSignature([u8; COMPACT_SIGNATURE_SIZE]);

impl CompactSignature {
    /// Create a CompactSignature from raw bytes.
    pub fn from_bytes(bytes: [u8; COMPACT_SIGNATURE_SIZE]) -> Self {
        CompactSignature(bytes)
    }

    /// Create a CompactSignature from a byte slice.
    ///
    /// Fails if the slice is not exactly 65 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let bytes: [u8; COMPACT_SIGNATURE_SIZE] =
            bytes.try_into().map_err(|_| CryptoError::InvalidSignature)?;
        Ok(CompactSignature(bytes))
    }

    /// Assemble a CompactSignature from its parts.
    pub fn from_parts(recovery_id: u8, compressed: bool, rs: &[u8; 64]) -> Self {
        let mut bytes = [0u8; COMPACT_SIGNATURE_SIZE];
        bytes[0] = 27 + recovery_id + if compressed { 4 } else { 0 };
        bytes[1..].copy_from_slice(rs);
        CompactSignature(bytes)
    }

    /// Get the raw bytes of the signature.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; COMPACT_SIGNATURE_SIZE] {
        &self.0
    }

    /// The recovery id encoded in the header byte.
    pub fn recovery_id(&self) -> u8 {
        self.0[0].wrapping_sub(27) & 3
    }

    /// Whether the header byte marks the signer's key as compressed.
    pub fn is_compressed(&self) -> bool {
        self.0[0].wrapping_sub(27) & 4 != 0
    }

    /// The 64-byte `r ‖ s` portion of the signature.
    pub fn rs_bytes(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Render the signature as base64 for audit logging.
    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(self.0)
    }
}

impl fmt::Debug for CompactSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactSignature({})", hex::encode(self.0))
    }
}

/// Capability interface over a recoverable-signature primitive.
pub trait RecoverableSigner {
    /// Produce a recoverable signature over a 256-bit digest.
    fn sign_recoverable(
        &self,
        digest: &[u8; 32],
        secret_key: &SecretKey,
    ) -> Result<CompactSignature, CryptoError>;

    /// Reconstruct the signing public key from a digest and signature.
    fn recover(
        &self,
        digest: &[u8; 32],
        signature: &CompactSignature,
    ) -> Result<PublicKey, CryptoError>;
}

/// Recoverable-signature backend over the secp256k1 curve.
pub struct Secp256k1Backend {
    secp: Secp256k1<All>,
}

impl Secp256k1Backend {
    /// Create a new backend with a fresh secp256k1 context.
    pub fn new() -> Self {
        Secp256k1Backend {
            secp: Secp256k1::new(),
        }
    }
}

impl Default for Secp256k1Backend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecoverableSigner for Secp256k1Backend {
    fn sign_recoverable(
        &self,
        digest: &[u8; 32],
        secret_key: &SecretKey,
    ) -> Result<CompactSignature, CryptoError> {
        let message = Message::from_digest_slice(digest).map_err(|_| CryptoError::InvalidDigest)?;
        let signature = self.secp.sign_ecdsa_recoverable(&message, secret_key);
        let (recovery_id, serialized) = signature.serialize_compact();

        // Causeway keys serialize compressed, so the header byte always
        // carries the compression marker.
        Ok(CompactSignature::from_parts(
            recovery_id.to_i32() as u8,
            true,
            &serialized,
        ))
    }

    fn recover(
        &self,
        digest: &[u8; 32],
        signature: &CompactSignature,
    ) -> Result<PublicKey, CryptoError> {
        let recovery_id = RecoveryId::from_i32(signature.recovery_id() as i32)
            .map_err(|_| CryptoError::InvalidRecoveryId)?;
        let recoverable = RecoverableSignature::from_compact(signature.rs_bytes(), recovery_id)
            .map_err(|_| CryptoError::InvalidSignature)?;
        let message = Message::from_digest_slice(digest).map_err(|_| CryptoError::InvalidDigest)?;

        self.secp
            .recover_ecdsa(&message, &recoverable)
            .map_err(|_| CryptoError::RecoveryFailed)
    }
}
