//! # BLAKE3 Hashing
//!
//! The single digest function of the core: content keys, block digests for
//! signing and node identifiers are all BLAKE3-256.

use shared_types::HASH_SIZE;

/// BLAKE3 hash output (256-bit).
pub type Hash = [u8; HASH_SIZE];

/// Hash data with BLAKE3 (one-shot).
pub fn hash_data(data: &[u8]) -> Hash {
    *blake3::hash(data).as_bytes()
}
