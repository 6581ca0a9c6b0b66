// Deterministic 20-byte digest used as a hash-to-bits source

use sha1::{Digest, Sha1};

/// Size of a SHA-1 digest in bytes
pub const DIGEST_LEN: usize = 20;

/// Compute the SHA-1 digest of a string's UTF-8 bytes
pub fn digest(text: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());

    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Read the last 3 bytes of a digest as a big-endian 24-bit value.
/// Missing leading bytes of a short digest count as zero.
pub fn trailing_u24(digest: &[u8]) -> u32 {
    digest
        .iter()
        .rev()
        .take(3)
        .rev()
        .fold(0u32, |acc, &byte| (acc << 8) | byte as u32)
}
