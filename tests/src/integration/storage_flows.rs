//! # Storage Flows
//!
//! The data store wired the way the node runtime wires it: a real
//! warehouse, the Kademlia policy handed to a DHT engine, one `DataService`
//! on top.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pn_02_dht_policy::test_utils::MockDhtEngine;
    use pn_02_dht_policy::{DhtError, DhtValue, NodeId};
    use pn_03_data_store::test_utils::FailingWarehouse;
    use pn_03_data_store::{
        data_to_hash, DataService, DataStoreApi, FileWarehouse, InMemoryWarehouse, StorageError,
        Warehouse,
    };
    use rand::RngCore;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn local_id() -> NodeId {
        NodeId::new([0xA0; 32])
    }

    fn random_payload(len: usize) -> Vec<u8> {
        let mut data = vec![0u8; len];
        rand::thread_rng().fill_bytes(&mut data);
        data
    }

    // =============================================================================
    // READ PATH
    // =============================================================================

    #[tokio::test]
    async fn test_stored_kilobyte_is_served_locally() {
        let dht = Arc::new(MockDhtEngine::new());
        let service = DataService::new(local_id(), Arc::new(InMemoryWarehouse::new()), dht.clone());
        let data = random_payload(1024);

        let hash = service.store_data_local(&data).await.unwrap();
        let found = service.get_data(&hash).await.unwrap().unwrap();

        assert_eq!(hash, data_to_hash(&data));
        assert_eq!(found.data, data);
        assert!(found.is_from(&local_id()));
        assert_eq!(dht.get_calls(), 0);
    }

    #[tokio::test]
    async fn test_absent_hash_costs_one_lookup_and_reports_not_found() {
        let dht = Arc::new(MockDhtEngine::new());
        let service = DataService::new(local_id(), Arc::new(InMemoryWarehouse::new()), dht.clone());

        let found = service.get_data(&data_to_hash(b"never stored")).await.unwrap();

        assert!(found.is_none());
        assert_eq!(dht.get_calls(), 1);
    }

    #[tokio::test]
    async fn test_remote_hit_reports_sender() {
        let sender = NodeId::new([0xB0; 32]);
        let dht = Arc::new(MockDhtEngine::with_response(DhtValue {
            data: b"from afar".to_vec(),
            sender,
        }));
        let service = DataService::new(local_id(), Arc::new(InMemoryWarehouse::new()), dht.clone());

        let found = service.get_data(&data_to_hash(b"from afar")).await.unwrap().unwrap();

        assert_eq!(found.source, sender);
        assert!(!found.is_from(&local_id()));
    }

    #[tokio::test]
    async fn test_concurrent_reads_each_cost_one_lookup() {
        let dht = Arc::new(MockDhtEngine::new());
        let service = Arc::new(DataService::new(
            local_id(),
            Arc::new(InMemoryWarehouse::new()),
            dht.clone(),
        ));

        let tasks: Vec<_> = (0u8..8)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.get_data(&[i; 32]).await })
            })
            .collect();
        for task in tasks {
            assert_eq!(task.await.unwrap(), Ok(None));
        }

        assert_eq!(dht.get_calls(), 8);
    }

    // =============================================================================
    // WRITE PATH
    // =============================================================================

    #[tokio::test]
    async fn test_file_backed_store_and_announce() {
        let dir = tempfile::tempdir().unwrap();
        let warehouse = Arc::new(FileWarehouse::open(dir.path()).unwrap());
        let dht = Arc::new(MockDhtEngine::new());
        let service = DataService::new(local_id(), warehouse.clone(), dht.clone());
        let data = random_payload(4096);

        let hash = service.store_data_dht(&data).await.unwrap();

        assert_eq!(warehouse.get(&hash).unwrap(), Some(data));
        assert_eq!(dht.stores(), vec![(hash, 4096)]);
    }

    #[tokio::test]
    async fn test_local_failure_blocks_announcement() {
        let dht = Arc::new(MockDhtEngine::new());
        let service = DataService::new(local_id(), Arc::new(FailingWarehouse::new()), dht.clone());

        let result = service.store_data_dht(b"payload").await;

        assert!(matches!(result, Err(StorageError::Warehouse(_))));
        assert!(dht.stores().is_empty());
    }

    #[tokio::test]
    async fn test_announce_failure_is_distinguishable() {
        let dht = Arc::new(MockDhtEngine::new());
        dht.fail_stores();
        let service = DataService::new(local_id(), Arc::new(InMemoryWarehouse::new()), dht.clone());

        let result = service.store_data_dht(b"payload").await;

        assert_eq!(result, Err(StorageError::Announce(DhtError::NoReachableNodes)));
        assert!(service
            .get_data_local(&data_to_hash(b"payload"))
            .await
            .unwrap()
            .is_some());
    }
}
