//! # Data Store (pn-03)
//!
//! Content-addressed storage for a Peernet node. Data is keyed by the BLAKE3
//! hash of its bytes; reads try the local warehouse first and fall back to a
//! single DHT lookup, writes land locally and may then be announced to the
//! DHT.
//!
//! ## Architecture
//!
//! - **Domain Layer:** `data_to_hash`, `RetrievedData`, errors
//! - **Ports Layer:** `DataStoreApi` (driving), `Warehouse` (driven);
//!   the DHT side is `pn_02_dht_policy::DhtEngine`
//! - **Service Layer:** `DataService`
//! - **Adapters Layer:** `InMemoryWarehouse`, `FileWarehouse`
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Local First | A local hit never touches the DHT |
//! | 2 | Single Lookup | A local miss costs exactly one DHT `get` |
//! | 3 | Read Only Reads | Reads never write the warehouse |
//! | 4 | Write Before Announce | Nothing is announced unless the local write succeeded |
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pn_02_dht_policy::{KademliaConfig, KademliaPolicy, NoOpDhtEngine, NodeId};
//! use pn_03_data_store::{DataService, DataStoreApi, InMemoryWarehouse};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let local_id = NodeId::new([1u8; 32]);
//! let policy = Arc::new(KademliaPolicy::new(local_id));
//! let dht = Arc::new(NoOpDhtEngine::new(local_id, KademliaConfig::default(), policy).unwrap());
//! let service = DataService::new(local_id, Arc::new(InMemoryWarehouse::new()), dht);
//!
//! let hash = service.store_data_local(b"hello").await.unwrap();
//! let found = service.get_data(&hash).await.unwrap().unwrap();
//! assert_eq!(found.data, b"hello");
//! assert_eq!(found.source, local_id);
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Warehouse double that fails on demand.
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Domain
pub use domain::{data_to_hash, RetrievedData, StorageError, WarehouseError};

// Ports
pub use ports::{DataStoreApi, InMemoryWarehouse, Warehouse};

// Service
pub use service::DataService;

// Adapters
pub use adapters::FileWarehouse;
