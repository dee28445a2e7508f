//! # Causeway Core
//!
//! Core cryptography and serialization for the Causeway protocol.
//!
//! This crate provides the foundation for the other Causeway crates:
//! - Cryptographic primitives (secp256k1 recoverable ECDSA, SHA-256,
//!   double-SHA256, HASH160)
//! - Key identities and the message-signing contract used to prove key
//!   control over arbitrary data
//! - Compact-size wire serialization

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod crypto;
pub mod error;
pub mod serialization;

// Re-export commonly used types at crate root
pub use crypto::{
    derive_key_id, payload_checksum, sha256, sha256d, CompactSignature, KeyId, KeyPair, PublicKey,
    RecoverableSigner, Secp256k1Backend, SecretKey, VerificationFailure,
};
pub use error::{CoreError, CryptoError, SerializationError};
