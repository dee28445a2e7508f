//! Cryptographic primitives for the Causeway protocol.
//!
//! This module provides:
//! - secp256k1 key pair generation and recoverable ECDSA signing
//! - SHA-256, double-SHA256, and HASH160 hashing
//! - Key identity derivation (HASH160 of the serialized public key)
//! - Domain-separated message signing and identity verification

mod hashing;
mod identity;
mod keys;
mod recovery;
mod signer;

pub use hashing::{hash160, payload_checksum, sha256, sha256d};
pub use identity::{derive_key_id, derive_key_id_uncompressed, KeyId};
pub use keys::{KeyPair, PublicKey, SecretKey};
pub use recovery::{
    CompactSignature, RecoverableSigner, Secp256k1Backend, COMPACT_SIGNATURE_SIZE,
};
pub use signer::{
    sign_hash, sign_message, signed_message_digest, verify_hash, verify_hash_with_key,
    verify_message, verify_message_with_key, VerificationFailure, MESSAGE_MAGIC,
};
