//! Content fingerprints.
//!
//! SHA-256 over the UTF-8 bytes, hex encoded. Used as an equality proxy for
//! dedup keys only; nothing here is a security boundary.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `text` (64 lowercase characters).
///
/// Deterministic and total: the empty string hashes like any other input.
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
