//! Test doubles for the data store.
//!
//! Enable with the `test-utils` feature flag.

use std::sync::atomic::{AtomicUsize, Ordering};

use shared_types::KeyHash;

use crate::domain::WarehouseError;
use crate::ports::Warehouse;

/// Warehouse whose every call fails with an I/O error.
#[derive(Debug, Default)]
pub struct FailingWarehouse {
    calls: AtomicUsize,
}

impl FailingWarehouse {
    /// Create the warehouse.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail(&self) -> WarehouseError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        WarehouseError::Io("disk unavailable".to_string())
    }
}

impl Warehouse for FailingWarehouse {
    fn get(&self, _key: &KeyHash) -> Result<Option<Vec<u8>>, WarehouseError> {
        Err(self.fail())
    }

    fn put(&self, _key: &KeyHash, _data: &[u8]) -> Result<(), WarehouseError> {
        Err(self.fail())
    }
}
