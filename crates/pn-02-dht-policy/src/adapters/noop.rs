//! Routing engine stand-in.
//!
//! Holds the parameters and callbacks a real engine is constructed with but
//! never contacts the network: lookups find nothing and announcements are
//! dropped.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{KeyHash, NodeId};
use tracing::{debug, info};

use crate::domain::{ConfigError, KademliaConfig};
use crate::ports::{DhtEngine, DhtError, DhtPolicy, DhtValue};

/// DHT handle for a node running without peers.
pub struct NoOpDhtEngine {
    local_id: NodeId,
    config: KademliaConfig,
    policy: Arc<dyn DhtPolicy>,
}

impl NoOpDhtEngine {
    /// Build the engine, rejecting unusable parameters.
    pub fn new(
        local_id: NodeId,
        config: KademliaConfig,
        policy: Arc<dyn DhtPolicy>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "[pn-02] DHT engine for {} (k={}, alpha={}) running without peers",
            local_id, config.k, config.alpha
        );
        Ok(Self {
            local_id,
            config,
            policy,
        })
    }

    /// Identifier of the local node.
    pub fn local_id(&self) -> &NodeId {
        &self.local_id
    }

    /// Parameters the engine was built with.
    pub fn config(&self) -> &KademliaConfig {
        &self.config
    }

    /// Callbacks the engine was built with.
    pub fn policy(&self) -> &Arc<dyn DhtPolicy> {
        &self.policy
    }
}

#[async_trait]
impl DhtEngine for NoOpDhtEngine {
    async fn get(&self, key: &KeyHash) -> Result<Option<DhtValue>, DhtError> {
        debug!("[pn-02] get {}: no peers", NodeId::from(*key));
        Ok(None)
    }

    async fn store(&self, key: &KeyHash, size: u64) -> Result<(), DhtError> {
        debug!("[pn-02] store {} ({} bytes): no peers", NodeId::from(*key), size);
        Ok(())
    }
}
