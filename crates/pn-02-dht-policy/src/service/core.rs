use shared_types::{KeyHash, NodeId};
use tracing::debug;

use crate::adapters::DirectDispatcher;
use crate::domain::{should_evict, Announcement, InfoStore, InformationRequest, Node};
use crate::ports::{AnnouncementDispatcher, DhtPolicy};

/// Policy callbacks for the local node.
///
/// Holds no mutable state; one instance is shared by every concurrent lookup
/// of the routing engine.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use pn_02_dht_policy::{DhtPolicy, KademliaPolicy, NodeId};
///
/// let policy: Arc<dyn DhtPolicy> = Arc::new(KademliaPolicy::new(NodeId::new([7u8; 32])));
/// ```
pub struct KademliaPolicy<D: AnnouncementDispatcher = DirectDispatcher> {
    local_id: NodeId,
    dispatcher: D,
}

impl KademliaPolicy<DirectDispatcher> {
    /// Policy that sends every announcement straight to the peer.
    pub fn new(local_id: NodeId) -> Self {
        Self::with_dispatcher(local_id, DirectDispatcher)
    }
}

impl<D: AnnouncementDispatcher> KademliaPolicy<D> {
    /// Policy routing announcements through `dispatcher`.
    pub fn with_dispatcher(local_id: NodeId, dispatcher: D) -> Self {
        Self {
            local_id,
            dispatcher,
        }
    }

    /// Identifier of the local node.
    pub fn local_id(&self) -> &NodeId {
        &self.local_id
    }

    /// The dispatch stage in use.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Send `announcement` to every node, counting the ones queued.
    ///
    /// A failure for one node is logged and does not stop the others.
    fn fan_out(&self, nodes: &[Node], announcement: Announcement) -> usize {
        nodes
            .iter()
            .filter(|node| match self.dispatcher.dispatch(node, announcement) {
                Ok(()) => true,
                Err(e) => {
                    debug!("[pn-02] {:?} to {} not sent: {}", announcement, node.id, e);
                    false
                }
            })
            .count()
    }
}

impl<D: AnnouncementDispatcher> DhtPolicy for KademliaPolicy<D> {
    fn should_evict(&self, incumbent: &Node, challenger: &Node) -> bool {
        should_evict(&self.local_id, &incumbent.snapshot(), &challenger.snapshot())
    }

    fn send_request_store(&self, node: &Node, key: &KeyHash, data_size: u64) -> bool {
        let announcement = Announcement::Store(InfoStore::data(*key, data_size));
        self.fan_out(std::slice::from_ref(node), announcement) == 1
    }

    fn send_request_find_node(&self, request: &InformationRequest) -> usize {
        // Asking for our own id means asking each peer for its own record.
        let announcement = if self.local_id.is_key(&request.key) {
            Announcement::FindSelf
        } else {
            Announcement::FindNode(request.key)
        };
        self.fan_out(&request.nodes, announcement)
    }

    fn send_request_find_value(&self, request: &InformationRequest) -> usize {
        self.fan_out(&request.nodes, Announcement::FindValue(request.key))
    }
}
