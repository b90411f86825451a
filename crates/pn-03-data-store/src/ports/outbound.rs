//! # Outbound Ports (Driven Ports)
//!
//! These are the interfaces this library requires the host application to
//! implement.

use std::collections::HashMap;

use parking_lot::RwLock;
use shared_types::KeyHash;

use crate::domain::WarehouseError;

/// Local persistent storage for data keyed by content hash.
///
/// Production: `FileWarehouse` (adapters/file.rs)
/// Testing: `InMemoryWarehouse` (below)
///
/// # Thread Safety
///
/// Methods take `&self`; implementations synchronize internally.
pub trait Warehouse: Send + Sync {
    /// Read the data stored under `key`.
    fn get(&self, key: &KeyHash) -> Result<Option<Vec<u8>>, WarehouseError>;

    /// Store `data` under `key`. Storing an existing key is a no-op.
    fn put(&self, key: &KeyHash, data: &[u8]) -> Result<(), WarehouseError>;
}

// =============================================================================
// ADAPTER IMPLEMENTATIONS
// Production: FileWarehouse in adapters/file.rs
// Testing: In-memory implementation below
// =============================================================================

#[derive(Default)]
struct MemoryState {
    data: HashMap<KeyHash, Vec<u8>>,
    used_bytes: u64,
}

/// In-memory warehouse with an optional byte budget.
#[derive(Default)]
pub struct InMemoryWarehouse {
    state: RwLock<MemoryState>,
    capacity_bytes: Option<u64>,
}

impl InMemoryWarehouse {
    /// Unbounded warehouse.
    pub fn new() -> Self {
        Self::default()
    }

    /// Warehouse refusing writes beyond `capacity_bytes` in total.
    pub fn with_capacity(capacity_bytes: u64) -> Self {
        Self {
            capacity_bytes: Some(capacity_bytes),
            ..Self::default()
        }
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.state.read().data.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.state.read().data.is_empty()
    }

    /// Total bytes stored.
    pub fn used_bytes(&self) -> u64 {
        self.state.read().used_bytes
    }
}

impl Warehouse for InMemoryWarehouse {
    fn get(&self, key: &KeyHash) -> Result<Option<Vec<u8>>, WarehouseError> {
        Ok(self.state.read().data.get(key).cloned())
    }

    fn put(&self, key: &KeyHash, data: &[u8]) -> Result<(), WarehouseError> {
        let mut state = self.state.write();
        if state.data.contains_key(key) {
            return Ok(());
        }

        let requested = data.len() as u64;
        if let Some(capacity) = self.capacity_bytes {
            let available = capacity.saturating_sub(state.used_bytes);
            if requested > available {
                return Err(WarehouseError::CapacityExceeded {
                    requested,
                    available,
                });
            }
        }

        state.data.insert(*key, data.to_vec());
        state.used_bytes += requested;
        Ok(())
    }
}
