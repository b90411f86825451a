use std::sync::Arc;

use async_trait::async_trait;
use pn_02_dht_policy::DhtEngine;
use shared_types::{KeyHash, NodeId};
use tracing::{debug, warn};

use crate::domain::{data_to_hash, RetrievedData, StorageError};
use crate::ports::{DataStoreApi, Warehouse};

/// Storage orchestrator for one node.
pub struct DataService {
    local_id: NodeId,
    warehouse: Arc<dyn Warehouse>,
    dht: Arc<dyn DhtEngine>,
}

impl DataService {
    /// Create the service.
    ///
    /// # Arguments
    ///
    /// * `local_id` - Reported as the source of local hits
    /// * `warehouse` - Local storage
    /// * `dht` - Routing engine handle, owned by the node runtime
    pub fn new(local_id: NodeId, warehouse: Arc<dyn Warehouse>, dht: Arc<dyn DhtEngine>) -> Self {
        Self {
            local_id,
            warehouse,
            dht,
        }
    }

    /// Identifier of the local node.
    pub fn local_id(&self) -> &NodeId {
        &self.local_id
    }

    /// Content key of `data`.
    pub fn data_to_hash(&self, data: &[u8]) -> KeyHash {
        data_to_hash(data)
    }

    fn read_local(&self, hash: &KeyHash) -> Result<Option<RetrievedData>, StorageError> {
        Ok(self
            .warehouse
            .get(hash)?
            .map(|data| RetrievedData::new(data, self.local_id)))
    }

    async fn read_dht(&self, hash: &KeyHash) -> Result<Option<RetrievedData>, StorageError> {
        let found = self.dht.get(hash).await.map_err(StorageError::Dht)?;
        Ok(found.map(|value| RetrievedData::new(value.data, value.sender)))
    }

    fn write_local(&self, data: &[u8]) -> Result<KeyHash, StorageError> {
        let hash = data_to_hash(data);
        self.warehouse.put(&hash, data)?;
        debug!("[pn-03] Stored {} ({} bytes)", NodeId::from(hash), data.len());
        Ok(hash)
    }
}

#[async_trait]
impl DataStoreApi for DataService {
    async fn get_data(&self, hash: &KeyHash) -> Result<Option<RetrievedData>, StorageError> {
        if let Some(found) = self.read_local(hash)? {
            return Ok(Some(found));
        }
        debug!("[pn-03] {} not held locally, asking DHT", NodeId::from(*hash));
        self.read_dht(hash).await
    }

    async fn get_data_local(&self, hash: &KeyHash) -> Result<Option<RetrievedData>, StorageError> {
        self.read_local(hash)
    }

    async fn get_data_dht(&self, hash: &KeyHash) -> Result<Option<RetrievedData>, StorageError> {
        self.read_dht(hash).await
    }

    async fn store_data_local(&self, data: &[u8]) -> Result<KeyHash, StorageError> {
        self.write_local(data)
    }

    async fn store_data_dht(&self, data: &[u8]) -> Result<KeyHash, StorageError> {
        let hash = self.write_local(data)?;

        if let Err(e) = self.dht.store(&hash, data.len() as u64).await {
            warn!("[pn-03] Announcing {} failed: {}", NodeId::from(hash), e);
            return Err(StorageError::Announce(e));
        }
        Ok(hash)
    }
}
