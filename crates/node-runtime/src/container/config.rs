//! # Node Configuration
//!
//! Loaded from a TOML file, then overridden from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `PN_DATA_DIR` | `data_dir` |
//! | `PN_LOG` | `log_level` |
//! | `PN_PRIVATE_KEY` | node secret key, 64 hex chars |
//!
//! The secret key is only ever read from the environment.

use std::fmt;
use std::path::{Path, PathBuf};

use pn_02_dht_policy::KademliaConfig;
use serde::Deserialize;
use thiserror::Error;
use zeroize::Zeroizing;

/// Environment variable overriding `data_dir`.
pub const ENV_DATA_DIR: &str = "PN_DATA_DIR";
/// Environment variable overriding `log_level`.
pub const ENV_LOG: &str = "PN_LOG";
/// Environment variable carrying the node secret key.
pub const ENV_PRIVATE_KEY: &str = "PN_PRIVATE_KEY";

/// Complete node configuration.
#[derive(Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeConfig {
    /// Warehouse directory. In-memory warehouse when unset.
    pub data_dir: Option<PathBuf>,
    /// Byte budget of the in-memory warehouse.
    pub warehouse_capacity_bytes: Option<u64>,
    /// Version written into blocks this node signs.
    pub blockchain_version: u64,
    /// Default tracing filter, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Routing engine parameters.
    pub kademlia: KademliaConfig,
    /// Node secret key in hex. Random identity when unset.
    #[serde(skip)]
    pub private_key: Option<Zeroizing<String>>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            warehouse_capacity_bytes: None,
            blockchain_version: 0,
            log_level: "info".to_string(),
            kademlia: KademliaConfig::default(),
            private_key: None,
        }
    }
}

impl fmt::Debug for NodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeConfig")
            .field("data_dir", &self.data_dir)
            .field("warehouse_capacity_bytes", &self.warehouse_capacity_bytes)
            .field("blockchain_version", &self.blockchain_version)
            .field("log_level", &self.log_level)
            .field("kademlia", &self.kademlia)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl NodeConfig {
    /// Parse a TOML document. Missing fields keep their defaults.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&source)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(level) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
            self.log_level = level;
        }
        if let Some(secret) = lookup(ENV_PRIVATE_KEY).filter(|v| !v.is_empty()) {
            self.private_key = Some(Zeroizing::new(secret));
        }
        self
    }

    /// Reject configurations the node cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.kademlia.validate().map_err(ConfigError::Kademlia)?;
        if self.data_dir.is_some() && self.warehouse_capacity_bytes.is_some() {
            return Err(ConfigError::CapacityWithDataDir);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Cannot read config file {}: {message}", path.display())]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        message: String,
    },

    /// Config file is not valid TOML for `NodeConfig`.
    #[error("Invalid config: {0}")]
    Parse(String),

    /// Routing engine parameters are unusable.
    #[error("Invalid kademlia section: {0}")]
    Kademlia(pn_02_dht_policy::ConfigError),

    /// A byte budget only applies to the in-memory warehouse.
    #[error("warehouse_capacity_bytes cannot be combined with data_dir")]
    CapacityWithDataDir,
}
