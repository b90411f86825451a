//! Component construction from `NodeConfig`.

use std::sync::Arc;

use pn_03_data_store::{FileWarehouse, InMemoryWarehouse, Warehouse, WarehouseError};
use shared_crypto::{CryptoError, Secp256k1KeyPair};
use tracing::{info, warn};

use super::config::NodeConfig;

/// Node keypair from the configured secret, or a fresh one.
pub fn build_identity(config: &NodeConfig) -> Result<Secp256k1KeyPair, CryptoError> {
    match &config.private_key {
        Some(secret) => Secp256k1KeyPair::from_hex(secret),
        None => {
            warn!("No private key configured, using an ephemeral identity");
            Ok(Secp256k1KeyPair::generate())
        }
    }
}

/// File warehouse under `data_dir`, otherwise an in-memory one.
pub fn build_warehouse(config: &NodeConfig) -> Result<Arc<dyn Warehouse>, WarehouseError> {
    match &config.data_dir {
        Some(dir) => Ok(Arc::new(FileWarehouse::open(dir)?)),
        None => {
            info!("No data directory configured, data is kept in memory");
            Ok(Arc::new(match config.warehouse_capacity_bytes {
                Some(capacity) => InMemoryWarehouse::with_capacity(capacity),
                None => InMemoryWarehouse::new(),
            }))
        }
    }
}
