//! Kademlia XOR distance.

use shared_types::{NodeId, HASH_SIZE};

/// Full-width XOR distance between two identifiers.
///
/// Ordering compares the bytes big-endian, so `a < b` means `a` is closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance([u8; HASH_SIZE]);

impl Distance {
    /// Raw XOR bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }
}

/// Calculate the XOR distance between two NodeIds.
///
/// # Properties
/// - Symmetric: `xor_distance(a, b) == xor_distance(b, a)`
/// - Self is zero: `xor_distance(a, a)` is all zero bytes
pub fn xor_distance(a: &NodeId, b: &NodeId) -> Distance {
    let mut out = [0u8; HASH_SIZE];
    for (o, (x, y)) in out.iter_mut().zip(a.as_bytes().iter().zip(b.as_bytes())) {
        *o = x ^ y;
    }
    Distance(out)
}

/// Whether `candidate` is strictly closer to `target` than `other` is.
pub fn is_closer(target: &NodeId, candidate: &NodeId, other: &NodeId) -> bool {
    xor_distance(target, candidate) < xor_distance(target, other)
}
