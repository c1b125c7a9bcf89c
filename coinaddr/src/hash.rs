//! Hashing helpers shared by the decoders.

use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// Number of checksum bytes appended to a Base58Check payload.
pub const CHECKSUM_LEN: usize = 4;

/// Create a SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut output = [0u8; 32];
    output.copy_from_slice(&Sha256::digest(data));
    output
}

/// Compute the Base58Check checksum: first 4 bytes of SHA-256(SHA-256(payload)).
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = sha256(&sha256(payload));
    let mut output = [0u8; CHECKSUM_LEN];
    output.copy_from_slice(&hash[..CHECKSUM_LEN]);
    output
}

/// Create a Keccak-256 hash (the pre-standard SHA-3 used by Ethereum).
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_checksum() {
        // Double SHA-256 of the empty string starts with 5df6e0e2.
        assert_eq!(checksum(b""), [0x5d, 0xf6, 0xe0, 0xe2]);

        let first = checksum(b"payload");
        assert_eq!(first, checksum(b"payload"));
        assert_ne!(first, checksum(b"payloae"));
    }

    #[test]
    fn test_keccak256() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }
}
