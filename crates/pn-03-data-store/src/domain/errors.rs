//! # Domain Errors
//!
//! Not-found is `Ok(None)` everywhere; these types only describe failures.

use pn_02_dht_policy::DhtError;
use thiserror::Error;

/// Errors from a warehouse backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WarehouseError {
    /// Writing would exceed the configured byte budget
    #[error("warehouse capacity exceeded: {requested} bytes requested, {available} available")]
    CapacityExceeded { requested: u64, available: u64 },
    /// Backend I/O failure
    #[error("warehouse I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for WarehouseError {
    fn from(e: std::io::Error) -> Self {
        WarehouseError::Io(e.to_string())
    }
}

/// Errors surfaced by `DataService`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// Local warehouse read or write failed
    #[error("local storage failed: {0}")]
    Warehouse(#[from] WarehouseError),
    /// DHT lookup failed
    #[error("DHT lookup failed: {0}")]
    Dht(DhtError),
    /// Data was written locally but could not be announced
    #[error("stored locally, DHT announcement failed: {0}")]
    Announce(DhtError),
}
