//! # Node Runtime
//!
//! ## Startup Sequence
//!
//! 1. Derive the node identity from config (or generate one)
//! 2. Open the warehouse
//! 3. Build the DHT policy and hand it to the routing engine factory
//! 4. Wire the data store over warehouse and engine
//! 5. `start()`: sign block 0 and store it locally
//!
//! `shutdown()` releases the data store and the engine handle.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use pn_02_dht_policy::{DhtEngine, DhtPolicy, KademliaConfig, KademliaPolicy};
use pn_03_data_store::{DataService, DataStoreApi};
use shared_crypto::Secp256k1KeyPair;
use shared_types::{KeyHash, NodeId};
use tracing::info;

use crate::container::{build_identity, build_warehouse, NodeConfig};
use crate::genesis::GenesisBuilder;

/// The running parts of a node.
pub struct NodeRuntime {
    config: NodeConfig,
    identity: Secp256k1KeyPair,
    local_id: NodeId,
    dht: Option<Arc<dyn DhtEngine>>,
    data_store: Option<Arc<DataService>>,
}

impl NodeRuntime {
    /// Build every component.
    ///
    /// `engine` receives the local node id, the Kademlia parameters and the
    /// policy callbacks, and returns the routing engine handle.
    pub fn new<F>(config: NodeConfig, engine: F) -> Result<Self>
    where
        F: FnOnce(NodeId, KademliaConfig, Arc<dyn DhtPolicy>) -> Result<Arc<dyn DhtEngine>>,
    {
        config.validate().context("invalid node configuration")?;

        let identity = build_identity(&config).context("invalid node private key")?;
        let local_id = identity.node_id();
        info!("Node id {}", local_id);

        let warehouse = build_warehouse(&config).context("failed to open warehouse")?;

        let policy: Arc<dyn DhtPolicy> = Arc::new(KademliaPolicy::new(local_id));
        let dht = engine(local_id, config.kademlia.clone(), policy)
            .context("failed to start DHT engine")?;

        let data_store = Arc::new(DataService::new(local_id, warehouse, Arc::clone(&dht)));

        Ok(Self {
            config,
            identity,
            local_id,
            dht: Some(dht),
            data_store: Some(data_store),
        })
    }

    /// Sign the node's genesis block and store it locally.
    ///
    /// Returns the content hash of the stored block.
    pub async fn start(&self) -> Result<KeyHash> {
        info!("===========================================");
        info!("  Peernet Core Node v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        let genesis = GenesisBuilder::new(self.config.blockchain_version)
            .build(&self.identity)
            .context("failed to build genesis block")?;

        let hash = self
            .data_store()?
            .store_data_local(&genesis.raw)
            .await
            .context("failed to store genesis block")?;

        info!(
            "Genesis block stored: {} ({} bytes)",
            NodeId::from(hash),
            genesis.raw.len()
        );
        match &self.config.data_dir {
            Some(dir) => info!("Data Dir: {}", dir.display()),
            None => info!("Data Dir: <memory>"),
        }
        Ok(hash)
    }

    /// Release the data store and the DHT handle. Idempotent.
    pub fn shutdown(&mut self) {
        self.data_store = None;
        if self.dht.take().is_some() {
            info!("Shutdown complete");
        }
    }

    /// Whether `shutdown` has run.
    pub fn is_shut_down(&self) -> bool {
        self.dht.is_none()
    }

    /// The data store, until shutdown.
    pub fn data_store(&self) -> Result<Arc<DataService>> {
        self.data_store
            .clone()
            .ok_or_else(|| anyhow!("node runtime is shut down"))
    }

    /// Identifier of the local node.
    pub fn local_id(&self) -> &NodeId {
        &self.local_id
    }

    /// The node keypair.
    pub fn identity(&self) -> &Secp256k1KeyPair {
        &self.identity
    }

    /// The configuration the runtime was built with.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }
}
