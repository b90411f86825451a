//! # Core Identifiers
//!
//! ## Clusters
//!
//! - **Content**: `KeyHash`, `HASH_SIZE`
//! - **Networking**: `NodeId`

use std::fmt;

/// Width in bytes of every digest and identifier in the keyspace (BLAKE3, 256-bit).
pub const HASH_SIZE: usize = 32;

/// A 32-byte content hash used as both storage key and DHT lookup key.
pub type KeyHash = [u8; HASH_SIZE];

/// 256-bit node identifier in the DHT keyspace.
///
/// # Security (Timing Attack Prevention)
///
/// Equality is constant-time. Standard `PartialEq` for byte arrays
/// short-circuits on the first difference, which leaks how many leading
/// bytes of a probed identifier match.
// derived Hash over the bytes agrees with the manual PartialEq
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Clone, Copy, Hash, Default)]
pub struct NodeId(pub [u8; HASH_SIZE]);

impl PartialEq for NodeId {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        let mut result = 0u8;
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            result |= a ^ b;
        }
        result == 0
    }
}

impl Eq for NodeId {}

impl NodeId {
    /// Create a NodeId from a raw 32-byte array.
    pub fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes for XOR distance calculation.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// All-zero identifier.
    pub fn zero() -> Self {
        Self([0u8; HASH_SIZE])
    }

    /// Whether this identifier names the same point in the keyspace as `key`.
    pub fn is_key(&self, key: &KeyHash) -> bool {
        *self == NodeId(*key)
    }
}

impl From<KeyHash> for NodeId {
    fn from(bytes: KeyHash) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for NodeId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", hex::encode(self.0))
    }
}

impl fmt::Display for NodeId {
    /// Abbreviated form for log lines: the first 8 bytes in hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0[..8]))
    }
}
