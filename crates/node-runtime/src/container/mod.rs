//! # Node Container
//!
//! Configuration and the components built from it before the DHT handle
//! exists: the node identity and the local warehouse.

pub mod components;
pub mod config;

pub use components::{build_identity, build_warehouse};
pub use config::{ConfigError, NodeConfig};
