//! # Peernet Core Node
//!
//! Usage: `node-runtime [CONFIG.toml]`
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (file, then `PN_*` environment overrides)
//! 2. Install the tracing subscriber
//! 3. Build the runtime with the standalone DHT engine
//! 4. Store the genesis block
//! 5. Run until Ctrl+C

use std::sync::Arc;

use anyhow::{Context, Result};
use node_runtime::{NodeConfig, NodeRuntime};
use pn_02_dht_policy::{DhtEngine, NoOpDhtEngine};
use tracing::info;

fn load_config() -> Result<NodeConfig> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => NodeConfig::load(&path)
            .with_context(|| format!("loading {}", path.to_string_lossy()))?,
        None => NodeConfig::default(),
    };
    Ok(config.with_env_overrides())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    node_runtime::logging::init_tracing(&config.log_level)?;

    let mut runtime = NodeRuntime::new(config, |id, kademlia, policy| {
        Ok(Arc::new(NoOpDhtEngine::new(id, kademlia, policy)?) as Arc<dyn DhtEngine>)
    })?;
    runtime.start().await?;

    info!("Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    runtime.shutdown();
    Ok(())
}
