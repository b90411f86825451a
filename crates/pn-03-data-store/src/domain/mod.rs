//! # Domain Layer
//!
//! Content addressing and the results and failures of storage operations.

pub mod entities;
pub mod errors;

pub use entities::{data_to_hash, RetrievedData};
pub use errors::{StorageError, WarehouseError};
