//! # DHT Policy Adapter (pn-02)
//!
//! Supplies an external Kademlia routing engine with the domain callbacks it
//! needs: which node to keep when a bucket slot is contested, and how abstract
//! store / find-node / find-value requests become outbound peer messages.
//!
//! ## Architecture
//!
//! - **Domain Layer:** XOR distance, eviction rule, request and announcement types
//! - **Ports Layer:** `DhtPolicy` (callbacks this crate provides to the engine),
//!   `Peer`, `AnnouncementDispatcher` and `DhtEngine` (what it consumes)
//! - **Service Layer:** `KademliaPolicy`, the `DhtPolicy` implementation
//! - **Adapters Layer:** `DirectDispatcher`, `NoOpDhtEngine`
//!
//! The routing table, its RPC transport and RTT measurement live outside this
//! crate; nodes arrive as snapshots and leave as announcements.
//!
//! ## Example
//!
//! ```rust
//! use pn_02_dht_policy::{DhtPolicy, InformationRequest, KademliaPolicy, NodeId};
//!
//! let policy = KademliaPolicy::new(NodeId::new([0u8; 32]));
//! let request = InformationRequest::new([1u8; 32], Vec::new(), false);
//!
//! // No candidates, nothing sent.
//! assert_eq!(policy.send_request_find_value(&request), 0);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Test doubles for peers and the DHT engine.
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Domain
pub use domain::{
    is_closer, should_evict, xor_distance, Announcement, ConfigError, Distance,
    EvictionCandidate, FindTarget, InfoStore, InformationRequest, KademliaConfig, Node,
};
pub use shared_types::{KeyHash, NodeId};

// Ports
pub use ports::{AnnouncementDispatcher, DhtEngine, DhtError, DhtPolicy, DhtValue, NetworkError, Peer};

// Service
pub use service::KademliaPolicy;

// Adapters
pub use adapters::{DirectDispatcher, NoOpDhtEngine};
