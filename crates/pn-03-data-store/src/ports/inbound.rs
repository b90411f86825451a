//! # Driving Port (Inbound API)

use async_trait::async_trait;
use shared_types::KeyHash;

use crate::domain::{RetrievedData, StorageError};

/// Primary API for storing and retrieving content-addressed data.
#[async_trait]
pub trait DataStoreApi: Send + Sync {
    /// Local warehouse first, then exactly one DHT lookup on a miss.
    ///
    /// `Ok(None)` means the data was found nowhere. Never writes locally.
    async fn get_data(&self, hash: &KeyHash) -> Result<Option<RetrievedData>, StorageError>;

    /// Local warehouse only.
    async fn get_data_local(&self, hash: &KeyHash) -> Result<Option<RetrievedData>, StorageError>;

    /// DHT only.
    async fn get_data_dht(&self, hash: &KeyHash) -> Result<Option<RetrievedData>, StorageError>;

    /// Store in the local warehouse, returning the content key.
    async fn store_data_local(&self, data: &[u8]) -> Result<KeyHash, StorageError>;

    /// Store locally, then announce the key and size to the DHT.
    async fn store_data_dht(&self, data: &[u8]) -> Result<KeyHash, StorageError>;
}
