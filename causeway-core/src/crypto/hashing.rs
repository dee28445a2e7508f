//! SHA-256 family hashing utilities.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of the input data.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-256: SHA-256(SHA-256(data)).
///
/// Used for message-signing digests and wire checksums.
#[inline]
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute HASH-160: RIPEMD-160(SHA-256(data)).
///
/// Used to derive 20-byte key identities from serialized public keys.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = sha256(data);
    let mut hasher = Ripemd160::new();
    hasher.update(sha);
    hasher.finalize().into()
}

/// Compute the 4-byte wire checksum of a message payload.
///
/// The checksum is the first four bytes of the double SHA-256 of the
/// payload.
pub fn payload_checksum(payload: &[u8]) -> [u8; 4] {
    let hash = sha256d(payload);
    let mut checksum = [0u8; 4];
    checksum.copy_from_slice(&hash[..4]);
    checksum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_determinism() {
        let data = b"hello world";
        assert_eq!(sha256(data), sha256(data));
    }

    #[test]
    fn test_sha256_known_value() {
        // SHA-256("abc") from the FIPS 180-2 test vectors
        let hash = sha256(b"abc");
        assert_eq!(
            hex::encode(hash),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256d_differs_from_single() {
        let data = b"hello world";
        assert_ne!(sha256d(data), sha256(data));
        assert_eq!(sha256d(data), sha256(&sha256(data)));
    }

    #[test]
    fn test_sha256d_empty_known_value() {
        // Double SHA-256 of the empty string, a widely published vector
        let hash = sha256d(b"");
        assert_eq!(
            hex::encode(hash),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn test_hash160_known_value() {
        // HASH-160 of the empty string
        let hash = hash160(b"");
        assert_eq!(
            hex::encode(hash),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
    }

    #[test]
    fn test_hash160_length() {
        assert_eq!(hash160(b"test data").len(), 20);
    }

    #[test]
    fn test_payload_checksum_is_prefix_of_sha256d() {
        let payload = b"payload bytes";
        let checksum = payload_checksum(payload);
        assert_eq!(checksum, sha256d(payload)[..4]);
    }

    #[test]
    fn test_payload_checksum_empty() {
        // First four bytes of sha256d("")
        assert_eq!(payload_checksum(b""), [0x5d, 0xf6, 0xe0, 0xe2]);
    }
}
