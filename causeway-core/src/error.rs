//! Error types for the Causeway core crate.

use std::fmt;

/// Top-level error type for causeway-core operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Cryptographic operation failed.
    Crypto(CryptoError),
    /// Serialization or deserialization failed.
    Serialization(SerializationError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Crypto(e) => write!(f, "crypto error: {}", e),
            CoreError::Serialization(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<CryptoError> for CoreError {
    fn from(e: CryptoError) -> Self {
        CoreError::Crypto(e)
    }
}

impl From<SerializationError> for CoreError {
    fn from(e: SerializationError) -> Self {
        CoreError::Serialization(e)
    }
}

/// Errors related to cryptographic operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CryptoError {
    /// The signature is malformed or invalid.
    InvalidSignature,
    /// The recovery id byte does not describe a valid recovery position.
    InvalidRecoveryId,
    /// The public key is malformed or invalid.
    InvalidPublicKey,
    /// The secret key is malformed or invalid.
    InvalidSecretKey,
    /// The 256-bit digest could not be interpreted as a signable message.
    InvalidDigest,
    /// Public key recovery from a signature failed.
    RecoveryFailed,
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidSignature => write!(f, "invalid signature format"),
            CryptoError::InvalidRecoveryId => write!(f, "invalid recovery id"),
            CryptoError::InvalidPublicKey => write!(f, "invalid public key format"),
            CryptoError::InvalidSecretKey => write!(f, "invalid secret key format"),
            CryptoError::InvalidDigest => write!(f, "invalid message digest"),
            CryptoError::RecoveryFailed => write!(f, "public key recovery failed"),
        }
    }
}

impl std::error::Error for CryptoError {}

/// Errors related to wire serialization and deserialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SerializationError {
    /// Input ended before the value was complete.
    UnexpectedEnd,
    /// A compact size used a longer encoding than necessary.
    NonCanonicalCompactSize,
    /// A decoded length exceeds the allowed maximum.
    OversizedLength(u64),
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationError::UnexpectedEnd => write!(f, "unexpected end of data"),
            SerializationError::NonCanonicalCompactSize => {
                write!(f, "non-canonical compact size encoding")
            }
            SerializationError::OversizedLength(n) => {
                write!(f, "length {} exceeds maximum", n)
            }
        }
    }
}

impl std::error::Error for SerializationError {}
