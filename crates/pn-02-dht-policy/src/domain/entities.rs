//! Core Domain Entities for the DHT policy
//!
//! Nodes are owned by the external routing engine; this crate only reads
//! them and sends through their `Peer` capability.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use shared_types::{KeyHash, NodeId};

use crate::ports::Peer;

/// A DHT peer entry as handed over by the routing engine.
#[derive(Clone)]
pub struct Node {
    /// Position in the keyspace.
    pub id: NodeId,
    /// Transport capability used to reach the peer.
    pub peer: Arc<dyn Peer>,
}

impl Node {
    /// Create a node entry.
    pub fn new(id: NodeId, peer: Arc<dyn Peer>) -> Self {
        Self { id, peer }
    }

    /// Current RTT estimate. A zero sample means every known connection is
    /// inactive and is reported as `None`.
    pub fn rtt(&self) -> Option<Duration> {
        self.peer.rtt().filter(|rtt| !rtt.is_zero())
    }

    /// Read-only snapshot used by the eviction rule.
    pub fn snapshot(&self) -> EvictionCandidate {
        EvictionCandidate {
            id: self.id,
            rtt: self.rtt(),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("rtt", &self.rtt())
            .finish_non_exhaustive()
    }
}

/// Snapshot of a node competing for a bucket slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvictionCandidate {
    /// Node identifier.
    pub id: NodeId,
    /// Usable RTT sample, `None` when absent or zero.
    pub rtt: Option<Duration>,
}

impl EvictionCandidate {
    /// Create a snapshot, folding a zero RTT into "no sample".
    pub fn new(id: NodeId, rtt: Option<Duration>) -> Self {
        Self {
            id,
            rtt: rtt.filter(|rtt| !rtt.is_zero()),
        }
    }
}

/// Announcement that this node holds (or vouches for) a piece of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoStore {
    /// Content hash of the data.
    pub id: KeyHash,
    /// Declared size in bytes.
    pub size: u64,
    /// Type tag, 0 for plain data.
    pub record_type: u8,
}

impl InfoStore {
    /// Plain data announcement.
    pub fn data(id: KeyHash, size: u64) -> Self {
        Self {
            id,
            size,
            record_type: 0,
        }
    }
}

/// One lookup attempt issued by the routing engine.
#[derive(Debug, Clone)]
pub struct InformationRequest {
    /// Search key (a node id or a content hash).
    pub key: KeyHash,
    /// Candidates to query, closest first as ordered by the engine.
    pub nodes: Vec<Node>,
    /// Set by the engine when the lookup was started for the local node.
    pub is_self_lookup: bool,
}

impl InformationRequest {
    /// Create a request.
    pub fn new(key: KeyHash, nodes: Vec<Node>, is_self_lookup: bool) -> Self {
        Self {
            key,
            nodes,
            is_self_lookup,
        }
    }
}

/// What a find-node message asks the remote peer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindTarget {
    /// The peer's own record instead of routing table entries.
    SelfRecord,
    /// Nodes close to a key.
    Key(KeyHash),
}

/// Unit of outbound traffic handed to an `AnnouncementDispatcher`.
///
/// Several announcements to the same peer can be merged into one message
/// by a dispatcher; callers only ever produce them one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    /// Store announcement.
    Store(InfoStore),
    /// Find the remote peer's own record.
    FindSelf,
    /// Find nodes close to a key.
    FindNode(KeyHash),
    /// Find data by hash.
    FindValue(KeyHash),
}
