//! # Driven Ports (Outbound SPI)
//!
//! These are the interfaces this crate **requires** the host application to
//! implement.

use std::time::Duration;

use async_trait::async_trait;
use shared_types::{KeyHash, NodeId};
use thiserror::Error;

use crate::domain::{Announcement, FindTarget, InfoStore, Node};

/// Capability of a connected peer.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; sends to distinct peers run
/// concurrently and must not block on a reply. A send only queues the
/// message with the transport.
pub trait Peer: Send + Sync {
    /// Most recent round-trip time. `None` or zero when every known
    /// connection to the peer is inactive.
    fn rtt(&self) -> Option<Duration>;

    /// Announce data the local node can supply.
    fn send_store_announcement(&self, store: InfoStore) -> Result<(), NetworkError>;

    /// Ask for nodes close to a key, or for the peer's own record.
    fn send_find_node(&self, target: FindTarget) -> Result<(), NetworkError>;

    /// Ask for data by hash.
    fn send_find_value(&self, key: KeyHash) -> Result<(), NetworkError>;
}

/// Stage between the policy and the peers.
///
/// Every outbound announcement passes through exactly one dispatcher call.
/// A coalescing stage (grouping announcements to the same peer into one
/// message) implements this trait without changing the policy callbacks.
pub trait AnnouncementDispatcher: Send + Sync {
    /// Deliver (or enqueue) one announcement for `node`.
    fn dispatch(&self, node: &Node, announcement: Announcement) -> Result<(), NetworkError>;
}

/// Errors from queuing a message with a peer's transport.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// No active connection to the peer
    #[error("no active connection to peer")]
    NotConnected,
    /// Outbound queue is full
    #[error("outbound queue full")]
    QueueFull,
    /// Message exceeds maximum allowed size
    #[error("message exceeds maximum size")]
    MessageTooLarge,
}

/// Data located through the DHT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhtValue {
    /// The data as supplied by the remote peer.
    pub data: Vec<u8>,
    /// Peer that actually supplied it.
    pub sender: NodeId,
}

/// Errors surfaced by the routing engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DhtError {
    /// The lookup ran out of time
    #[error("DHT operation timed out")]
    Timeout,
    /// No candidate node could be contacted
    #[error("no reachable nodes")]
    NoReachableNodes,
    /// Transport failure inside the engine
    #[error("DHT transport error: {0}")]
    Transport(String),
}

/// Handle to the routing engine.
///
/// Not-found is `Ok(None)`. Retries belong to the engine.
#[async_trait]
pub trait DhtEngine: Send + Sync {
    /// Look up data by hash.
    async fn get(&self, key: &KeyHash) -> Result<Option<DhtValue>, DhtError>;

    /// Announce to the closest nodes that the local node holds `key`.
    async fn store(&self, key: &KeyHash, size: u64) -> Result<(), DhtError>;
}
