//! Core Domain Entities for the data store

use shared_crypto::hash_data;
use shared_types::{KeyHash, NodeId};

/// Content key of `data`: its BLAKE3 digest.
pub fn data_to_hash(data: &[u8]) -> KeyHash {
    hash_data(data)
}

/// Data found by a lookup together with the node that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedData {
    /// The stored bytes.
    pub data: Vec<u8>,
    /// Local node id for warehouse hits, the remote sender for DHT hits.
    pub source: NodeId,
}

impl RetrievedData {
    /// Pair data with its source.
    pub fn new(data: Vec<u8>, source: NodeId) -> Self {
        Self { data, source }
    }

    /// Whether the data was supplied by `node_id`.
    pub fn is_from(&self, node_id: &NodeId) -> bool {
        self.source == *node_id
    }
}
