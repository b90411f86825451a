//! # Driving Port (Inbound API)
//!
//! The callback contract a routing engine is constructed with.

use shared_types::KeyHash;

use crate::domain::{InformationRequest, Node};

/// Domain callbacks consumed by the routing engine.
///
/// # Thread Safety
///
/// The engine calls these from many lookups at once; implementations hold
/// no mutable state.
pub trait DhtPolicy: Send + Sync {
    /// Whether `incumbent` should be evicted in favor of `challenger`.
    fn should_evict(&self, incumbent: &Node, challenger: &Node) -> bool;

    /// Ask `node` to record that the local node holds `key`.
    ///
    /// Returns `true` if the announcement was queued.
    fn send_request_store(&self, node: &Node, key: &KeyHash, data_size: u64) -> bool;

    /// Send a find-node request to every candidate of `request`.
    ///
    /// Returns the number of requests queued.
    fn send_request_find_node(&self, request: &InformationRequest) -> usize;

    /// Send a find-value request to every candidate of `request`.
    ///
    /// Returns the number of requests queued.
    fn send_request_find_value(&self, request: &InformationRequest) -> usize;
}
