//! Key identity derivation.
//!
//! A key identity is the HASH-160 (RIPEMD-160 of SHA-256) of a
//! serialized public key. The 20-byte form keeps identities compact
//! without exposing the full public key until a signature recovers it.

use std::fmt;

use super::hashing::hash160;
use super::keys::PublicKey;

/// 20-byte identity of a public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId([u8; 20]);

impl KeyId {
    /// Create a KeyId from raw bytes.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        KeyId(bytes)
    }

    /// Get the raw bytes of the identity.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyId({})", hex::encode(self.0))
    }
}

/// Derive a key identity from a public key.
///
/// The identity is HASH-160 of the 33-byte compressed serialization,
/// the form Causeway keys use on the wire.
pub fn derive_key_id(public_key: &PublicKey) -> KeyId {
    KeyId(hash160(&public_key.serialize()))
}

/// Derive a key identity from the 65-byte uncompressed serialization.
///
/// Signatures produced by holders of legacy uncompressed keys recover
/// to this identity form.
pub fn derive_key_id_uncompressed(public_key: &PublicKey) -> KeyId {
    KeyId(hash160(&public_key.serialize_uncompressed()))
}
