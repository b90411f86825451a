//! # Node Runtime Library
//!
//! This library exposes the internal modules of the node runtime for testing.
//! The main entry point is the `main.rs` binary.
//!
//! - `container/` - Configuration, identity and warehouse construction
//! - `genesis/` - Block 0 of the node's chain
//! - `runtime` - `NodeRuntime`, owner of the DHT handle and data store
//! - `logging` - tracing subscriber setup

#![warn(missing_docs)]

pub mod container;
pub mod genesis;
pub mod logging;
pub mod runtime;

pub use container::{ConfigError, NodeConfig};
pub use runtime::NodeRuntime;
