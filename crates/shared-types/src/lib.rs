//! # Shared Types Crate
//!
//! Identifiers shared across the Peernet core crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `NodeId` and `KeyHash` are defined once here
//!   and consumed by the codec, the DHT policy and the storage orchestrator.
//! - **Fixed Width**: every identifier is exactly [`HASH_SIZE`] bytes.

pub mod entities;

pub use entities::*;
