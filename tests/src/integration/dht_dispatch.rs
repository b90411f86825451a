//! # DHT Dispatch Flows
//!
//! The policy as a routing engine sees it: a shared `Arc<dyn DhtPolicy>`
//! invoked with node snapshots backed by recording peers.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use pn_02_dht_policy::test_utils::RecordingPeer;
    use pn_02_dht_policy::{
        Announcement, DhtPolicy, InfoStore, InformationRequest, KademliaPolicy, Node, NodeId,
    };
    use shared_crypto::Secp256k1KeyPair;

    fn policy_for(local_id: NodeId) -> Arc<dyn DhtPolicy> {
        Arc::new(KademliaPolicy::new(local_id))
    }

    fn peers(count: u8) -> (Vec<Node>, Vec<Arc<RecordingPeer>>) {
        (1..=count)
            .map(|i| {
                let peer = Arc::new(RecordingPeer::new(Some(Duration::from_millis(u64::from(i)))));
                (Node::new(NodeId::new([i; 32]), peer.clone()), peer)
            })
            .unzip()
    }

    #[test]
    fn test_three_candidates_three_find_value_messages() {
        let policy = policy_for(NodeId::new([0xEE; 32]));
        let (nodes, recorders) = peers(3);
        let key = [0x77; 32];

        assert_eq!(
            policy.send_request_find_value(&InformationRequest::new(key, nodes, false)),
            3
        );

        let total: usize = recorders.iter().map(|p| p.sent().len()).sum();
        assert_eq!(total, 3);
        assert!(recorders
            .iter()
            .all(|p| p.sent() == vec![Announcement::FindValue(key)]));
    }

    #[test]
    fn test_bootstrap_self_lookup_from_keypair_identity() {
        let identity = Secp256k1KeyPair::generate();
        let local_id = identity.node_id();
        let policy = policy_for(local_id);
        let (nodes, recorders) = peers(2);

        policy.send_request_find_node(&InformationRequest::new(*local_id.as_bytes(), nodes, true));

        for peer in recorders {
            assert_eq!(peer.sent(), vec![Announcement::FindSelf]);
        }
    }

    #[test]
    fn test_store_then_find_sequence_per_peer() {
        let policy = policy_for(NodeId::new([0xEE; 32]));
        let (nodes, recorders) = peers(1);
        let key = [0x10; 32];

        assert!(policy.send_request_store(&nodes[0], &key, 512));
        policy.send_request_find_node(&InformationRequest::new(key, nodes.clone(), false));
        policy.send_request_find_value(&InformationRequest::new(key, nodes, false));

        assert_eq!(
            recorders[0].sent(),
            vec![
                Announcement::Store(InfoStore::data(key, 512)),
                Announcement::FindNode(key),
                Announcement::FindValue(key),
            ]
        );
    }

    #[test]
    fn test_policy_shared_across_threads() {
        let policy = policy_for(NodeId::new([0xEE; 32]));
        let (nodes, recorders) = peers(4);

        let handles: Vec<_> = (0u8..4)
            .map(|i| {
                let policy = Arc::clone(&policy);
                let nodes = nodes.clone();
                std::thread::spawn(move || {
                    policy.send_request_find_value(&InformationRequest::new([i; 32], nodes, false))
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 4);
        }

        assert!(recorders.iter().all(|p| p.sent().len() == 4));
    }

    #[test]
    fn test_eviction_prefers_live_low_latency_nodes() {
        let policy = policy_for(NodeId::new([0x00; 32]));
        let dead = Node::new(NodeId::new([0x01; 32]), Arc::new(RecordingPeer::new(None)));
        let slow = Node::new(
            NodeId::new([0x02; 32]),
            Arc::new(RecordingPeer::new(Some(Duration::from_millis(200)))),
        );
        let fast = Node::new(
            NodeId::new([0x03; 32]),
            Arc::new(RecordingPeer::new(Some(Duration::from_millis(10)))),
        );

        assert!(policy.should_evict(&dead, &slow));
        assert!(policy.should_evict(&slow, &fast));
        assert!(!policy.should_evict(&fast, &slow));
    }
}
