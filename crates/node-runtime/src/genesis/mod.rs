//! # Genesis Module
//!
//! Block 0 of the node's own chain:
//!
//! - Number: 0
//! - Previous hash: 32 zero bytes
//! - Signed with the node key
//! - Stored in the local warehouse under its content hash

pub mod builder;

pub use builder::{GenesisBlock, GenesisBuilder, GenesisError};
