//! Secp256k1 key pair generation and management.

use rand::rngs::OsRng;
use secp256k1::Secp256k1;

use crate::error::CryptoError;

/// Type alias for a secp256k1 secret key.
pub type SecretKey = secp256k1::SecretKey;

/// Type alias for a secp256k1 public key.
pub type PublicKey = secp256k1::PublicKey;

/// Secp256k1 key pair.
///
/// Contains both the secret key and the derived public key. The secret
/// key should be kept secure and never transmitted.
pub struct KeyPair {
    secret_key: SecretKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Generate a new random key pair using the OS random number generator.
    pub fn generate() -> Self {
        let secp = Secp256k1::new();
        let (secret_key, public_key) = secp.generate_keypair(&mut OsRng);
        KeyPair {
            secret_key,
            public_key,
        }
    }

    /// Create a key pair from a 32-byte secret key.
    pub fn from_secret_bytes(bytes: &[u8; 32]) -> Result<Self, CryptoError> {
        let secp = Secp256k1::new();
        let secret_key =
            SecretKey::from_slice(bytes).map_err(|_| CryptoError::InvalidSecretKey)?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);
        Ok(KeyPair {
            secret_key,
            public_key,
        })
    }

    /// Get the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Get the secret key.
    ///
    /// Use with caution - the secret key should be kept secure.
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Get the raw bytes of the secret key.
    ///
    /// Use with extreme caution - exposing these bytes compromises the key.
    pub fn secret_bytes(&self) -> [u8; 32] {
        self.secret_key.secret_bytes()
    }
}

impl Clone for KeyPair {
    fn clone(&self) -> Self {
        KeyPair {
            secret_key: self.secret_key,
            public_key: self.public_key,
        }
    }
}
